//! List Service
//! Mission: CRUD over lists, always scoped to the authenticated owner

use crate::api::MessageResponse;
use crate::error::ApiError;
use crate::lists::{
    models::{CreateListRequest, List, ListSummary, UpdateListRequest, DEFAULT_LIST_COLOR},
    store::ListStore,
};

const LIST_NOT_FOUND: &str = "List not found";

pub struct ListService {
    store: ListStore,
}

fn required_title(title: &str) -> Result<&str, ApiError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(ApiError::validation("title is required"));
    }
    Ok(title)
}

/// Blank or missing colors fall back to the default
fn color_or_default(color: Option<&str>) -> &str {
    color
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .unwrap_or(DEFAULT_LIST_COLOR)
}

impl ListService {
    pub fn new(store: ListStore) -> Self {
        Self { store }
    }

    pub async fn list_all(&self, owner_id: i64) -> Result<Vec<ListSummary>, ApiError> {
        Ok(self.store.list_with_counts(owner_id).await?)
    }

    pub async fn create(&self, owner_id: i64, req: CreateListRequest) -> Result<List, ApiError> {
        let title = required_title(&req.title)?;
        let color = color_or_default(req.color.as_deref());

        Ok(self
            .store
            .insert(owner_id, title, req.description.as_deref(), color)
            .await?)
    }

    pub async fn update(
        &self,
        id: i64,
        owner_id: i64,
        req: UpdateListRequest,
    ) -> Result<List, ApiError> {
        let title = required_title(&req.title)?;
        let color = color_or_default(req.color.as_deref());

        self.store
            .update(id, owner_id, title, req.description.as_deref(), color)
            .await?
            .ok_or_else(|| ApiError::not_found(LIST_NOT_FOUND))
    }

    pub async fn delete(&self, id: i64, owner_id: i64) -> Result<MessageResponse, ApiError> {
        self.store
            .delete(id, owner_id)
            .await?
            .ok_or_else(|| ApiError::not_found(LIST_NOT_FOUND))?;

        Ok(MessageResponse::new("List deleted successfully"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::UserStore;
    use crate::db::Database;

    async fn setup() -> (ListService, i64, i64) {
        let db = Database::in_memory().unwrap();
        let users = UserStore::new(db.clone());
        let owner = users
            .create_user("owner", "owner@example.com", "hash")
            .await
            .unwrap()
            .unwrap();
        let stranger = users
            .create_user("stranger", "stranger@example.com", "hash")
            .await
            .unwrap()
            .unwrap();
        (ListService::new(ListStore::new(db)), owner.id, stranger.id)
    }

    fn create_req(title: &str, color: Option<&str>) -> CreateListRequest {
        CreateListRequest {
            title: title.to_string(),
            description: None,
            color: color.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_create_defaults_color() {
        let (service, owner, _) = setup().await;

        let list = service.create(owner, create_req("Work", None)).await.unwrap();
        assert_eq!(list.color, "#4A90E2");
        assert_eq!(list.user_id, owner);

        let colored = service
            .create(owner, create_req("Home", Some("#FF0000")))
            .await
            .unwrap();
        assert_eq!(colored.color, "#FF0000");
    }

    #[tokio::test]
    async fn test_create_requires_title() {
        let (service, owner, _) = setup().await;

        let result = service.create(owner, create_req("   ", None)).await;
        assert!(matches!(result, Err(ApiError::Validation(_))));
    }

    #[tokio::test]
    async fn test_foreign_list_is_not_found() {
        let (service, owner, stranger) = setup().await;
        let list = service.create(owner, create_req("Private", None)).await.unwrap();

        let update = service
            .update(
                list.id,
                stranger,
                UpdateListRequest {
                    title: "Mine now".to_string(),
                    description: None,
                    color: None,
                },
            )
            .await;
        let delete = service.delete(list.id, stranger).await;
        let missing = service.delete(list.id + 1000, owner).await;

        for result in [update.map(|_| ()), delete.map(|_| ()), missing.map(|_| ())] {
            match result {
                Err(ApiError::NotFound(msg)) => assert_eq!(msg, LIST_NOT_FOUND),
                other => panic!("Expected NotFound, got {:?}", other),
            }
        }

        // Still intact for its owner
        let lists = service.list_all(owner).await.unwrap();
        assert_eq!(lists[0].list.title, "Private");
    }

    #[tokio::test]
    async fn test_update_replaces_all_fields() {
        let (service, owner, _) = setup().await;
        let list = service
            .create(
                owner,
                CreateListRequest {
                    title: "Trip".to_string(),
                    description: Some("packing".to_string()),
                    color: Some("#123456".to_string()),
                },
            )
            .await
            .unwrap();

        let updated = service
            .update(
                list.id,
                owner,
                UpdateListRequest {
                    title: "Vacation".to_string(),
                    description: None,
                    color: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.title, "Vacation");
        assert_eq!(updated.description, None);
        assert_eq!(updated.color, DEFAULT_LIST_COLOR);
    }

    #[tokio::test]
    async fn test_delete_returns_message() {
        let (service, owner, _) = setup().await;
        let list = service.create(owner, create_req("Temp", None)).await.unwrap();

        let response = service.delete(list.id, owner).await.unwrap();
        assert_eq!(response.message, "List deleted successfully");
        assert!(service.list_all(owner).await.unwrap().is_empty());
    }
}
