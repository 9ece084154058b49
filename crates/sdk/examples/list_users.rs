use authentik_client::{AuthentikClient, PagingContext, core::UsersListParams};
use tracing_subscriber::EnvFilter;

/// Lists active users page by page.
///
/// Reads `AUTHENTIK_BASE_URL` and `AUTHENTIK_API_TOKEN` from the environment
/// or a `.env` file.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,authentik_client=debug")),
        )
        .init();

    let client = AuthentikClient::from_env()?;

    let version = client.admin.version_retrieve().await?;
    println!("Connected to authentik {}", version["version_current"]);

    let params = UsersListParams { is_active: Some(true), ..Default::default() };
    let mut paging = PagingContext::new(1, 50).with_ordering("username");

    loop {
        let page = client.core.users_list(&params, &paging).await?;
        for user in &page.results {
            println!("{:>6}  {}", user["pk"], user["username"].as_str().unwrap_or_default());
        }

        match page.next_page() {
            Some(next) => paging = paging.at_page(next),
            None => break,
        }
    }

    Ok(())
}
