use serde::Serialize;
use serde_json::Value;

use super::{StagesApi, types::{InvitationInvitationsListParams, InvitationStagesListParams}};
use crate::api::types::{ApiResult, PaginatedResult, PagingContext};

impl StagesApi {
    pub async fn invitation_invitations_list(
        &self,
        params: &InvitationInvitationsListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("stages/invitation/invitations/", params, paging).await
    }

    pub async fn invitation_invitations_create<B: Serialize + ?Sized>(
        &self,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.post("stages/invitation/invitations/", request).await
    }

    pub async fn invitation_invitations_retrieve(&self, invite_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("stages/invitation/invitations/{}/", invite_uuid)).await
    }

    pub async fn invitation_invitations_update<B: Serialize + ?Sized>(
        &self,
        invite_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.put(&format!("stages/invitation/invitations/{}/", invite_uuid), request).await
    }

    pub async fn invitation_invitations_partial_update<B: Serialize + ?Sized>(
        &self,
        invite_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.patch(&format!("stages/invitation/invitations/{}/", invite_uuid), request).await
    }

    pub async fn invitation_invitations_destroy(&self, invite_uuid: &str) -> ApiResult<()> {
        self.client.delete_status(&format!("stages/invitation/invitations/{}/", invite_uuid)).await
    }

    pub async fn invitation_invitations_used_by_list(&self, invite_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("stages/invitation/invitations/{}/used_by/", invite_uuid)).await
    }

    pub async fn invitation_stages_list(
        &self,
        params: &InvitationStagesListParams,
        paging: &PagingContext,
    ) -> ApiResult<PaginatedResult> {
        self.client.get_page("stages/invitation/stages/", params, paging).await
    }

    pub async fn invitation_stages_create<B: Serialize + ?Sized>(
        &self,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.post("stages/invitation/stages/", request).await
    }

    pub async fn invitation_stages_retrieve(&self, stage_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("stages/invitation/stages/{}/", stage_uuid)).await
    }

    pub async fn invitation_stages_update<B: Serialize + ?Sized>(
        &self,
        stage_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.put(&format!("stages/invitation/stages/{}/", stage_uuid), request).await
    }

    pub async fn invitation_stages_partial_update<B: Serialize + ?Sized>(
        &self,
        stage_uuid: &str,
        request: &B,
    ) -> ApiResult<Value> {
        self.client.patch(&format!("stages/invitation/stages/{}/", stage_uuid), request).await
    }

    pub async fn invitation_stages_destroy(&self, stage_uuid: &str) -> ApiResult<()> {
        self.client.delete_status(&format!("stages/invitation/stages/{}/", stage_uuid)).await
    }

    pub async fn invitation_stages_used_by_list(&self, stage_uuid: &str) -> ApiResult<Value> {
        self.client.get(&format!("stages/invitation/stages/{}/used_by/", stage_uuid)).await
    }
}
