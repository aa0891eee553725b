//! End-to-end flows of the entity client against an in-memory backend

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::cmp::Ordering;
    use std::collections::BTreeMap;

    use crate::core::{
        ApiError, EntityClient, FetchMode, FormMode, ListQuery, PageLinks, PaginationState,
        Portfolio, PortfolioApi, PortfolioForm, PortfolioPage, PortfolioState, SortField,
        SortOrder, StateSlice, SuccessLatch, User,
    };

    /// Backend double that behaves like the real REST resource
    #[derive(Default)]
    struct MemoryApi {
        records: RefCell<BTreeMap<i64, Portfolio>>,
        next_id: Cell<i64>,
        users: Vec<User>,
        fail_next: Cell<bool>,
        queries: RefCell<Vec<ListQuery>>,
    }

    impl MemoryApi {
        fn with_users() -> Self {
            Self {
                users: vec![User::new("1", "admin"), User::new("2", "user")],
                ..Self::default()
            }
        }

        fn seeded(count: i64) -> Self {
            let api = Self::with_users();
            for n in 1..=count {
                let entity = sample(&format!("Project {:04}", n));
                api.insert(entity);
            }
            api
        }

        fn insert(&self, mut entity: Portfolio) -> Portfolio {
            let id = self.next_id.get() + 1;
            self.next_id.set(id);
            entity.id = Some(id);
            self.records.borrow_mut().insert(id, entity.clone());
            entity
        }

        fn fail_once(&self) {
            self.fail_next.set(true);
        }

        fn check_failure(&self) -> Result<(), ApiError> {
            if self.fail_next.replace(false) {
                return Err(ApiError::Network("connection reset".to_string()));
            }
            Ok(())
        }

        fn last_query(&self) -> Option<ListQuery> {
            self.queries.borrow().last().cloned()
        }
    }

    fn compare(a: &Portfolio, b: &Portfolio, field: SortField) -> Ordering {
        match field {
            SortField::Id => a.id.cmp(&b.id),
            SortField::ProjectName => a.project_name.cmp(&b.project_name),
            SortField::Description => a.description.cmp(&b.description),
            SortField::ImageUrl => a.image_url.cmp(&b.image_url),
            SortField::Link => a.link.cmp(&b.link),
        }
    }

    impl PortfolioApi for MemoryApi {
        async fn list(&self, query: &ListQuery) -> Result<PortfolioPage, ApiError> {
            self.check_failure()?;
            self.queries.borrow_mut().push(query.clone());

            let (field, order) = query
                .sort
                .as_deref()
                .and_then(|s| s.split_once(','))
                .map(|(f, o)| {
                    (
                        f.parse::<SortField>().unwrap_or_default(),
                        o.parse::<SortOrder>().unwrap_or_default(),
                    )
                })
                .unwrap_or_default();

            let mut items: Vec<Portfolio> = self.records.borrow().values().cloned().collect();
            items.sort_by(|a, b| {
                let ord = compare(a, b, field);
                if order == SortOrder::Desc { ord.reverse() } else { ord }
            });

            let total = items.len() as u32;
            let page = query.page.unwrap_or(0);
            let size = query.size.unwrap_or(20).max(1);
            let last = total.div_ceil(size).saturating_sub(1);
            let links = PageLinks {
                first: Some(0),
                prev: (page > 0).then(|| page - 1),
                next: (page < last).then(|| page + 1),
                last: Some(last),
            };

            let items = items
                .into_iter()
                .skip((page * size) as usize)
                .take(size as usize)
                .collect();

            Ok(PortfolioPage {
                items,
                links,
                total_items: total as u64,
            })
        }

        async fn get_one(&self, id: i64) -> Result<Portfolio, ApiError> {
            self.check_failure()?;
            self.records
                .borrow()
                .get(&id)
                .cloned()
                .ok_or(ApiError::NotFound(id))
        }

        async fn create(&self, entity: &Portfolio) -> Result<Portfolio, ApiError> {
            self.check_failure()?;
            if entity.id.is_some() {
                return Err(ApiError::Http {
                    status: 400,
                    message: "A new portfolio cannot already have an ID".to_string(),
                });
            }
            Ok(self.insert(entity.clone()))
        }

        async fn update(&self, entity: &Portfolio) -> Result<Portfolio, ApiError> {
            self.check_failure()?;
            let id = entity.id.ok_or(ApiError::MissingId)?;
            let mut records = self.records.borrow_mut();
            if !records.contains_key(&id) {
                return Err(ApiError::NotFound(id));
            }
            records.insert(id, entity.clone());
            Ok(entity.clone())
        }

        async fn partial_update(&self, entity: &Portfolio) -> Result<Portfolio, ApiError> {
            self.check_failure()?;
            let id = entity.id.ok_or(ApiError::MissingId)?;
            let mut records = self.records.borrow_mut();
            let existing = records.get_mut(&id).ok_or(ApiError::NotFound(id))?;
            for (target, value) in [
                (&mut existing.project_name, &entity.project_name),
                (&mut existing.description, &entity.description),
                (&mut existing.image_url, &entity.image_url),
                (&mut existing.link, &entity.link),
            ] {
                if !value.is_empty() {
                    *target = value.clone();
                }
            }
            Ok(existing.clone())
        }

        async fn remove(&self, id: i64) -> Result<i64, ApiError> {
            self.check_failure()?;
            self.records.borrow_mut().remove(&id);
            Ok(id)
        }

        async fn list_users(&self) -> Result<Vec<User>, ApiError> {
            self.check_failure()?;
            Ok(self.users.clone())
        }
    }

    fn sample(name: &str) -> Portfolio {
        Portfolio::new(
            name,
            "Portfolio entry for testing",
            "https://img.example.com/shot.png",
            "https://example.com/project",
        )
        .with_user(User::new("1", "admin"))
    }

    fn client(api: MemoryApi) -> EntityClient<MemoryApi, RefCell<PortfolioState>> {
        EntityClient::new(api, RefCell::new(PortfolioState::default()))
    }

    fn ids(state: &PortfolioState) -> Vec<i64> {
        state.entities.iter().filter_map(|e| e.id).collect()
    }

    #[tokio::test]
    async fn test_create_then_fetch_round_trip() {
        let client = client(MemoryApi::with_users());
        let users = client.get_users().await.unwrap();

        let form = PortfolioForm {
            project_name: "Ray Tracer 2000".to_string(),
            description: "Weekend ray tracer in Rust".to_string(),
            image_url: "https://img.example.com/render.jpg".to_string(),
            link: "https://github.com/example/rt".to_string(),
            user_id: "2".to_string(),
            ..PortfolioForm::default()
        };
        let entity = form.to_entity(FormMode::Create, &users).unwrap();

        let created = client.create_entity(entity.clone()).await.unwrap();
        let id = created.id.expect("server assigns an id");

        let fetched = client.get_entity(id).await.unwrap();
        assert_eq!(fetched, Portfolio { id: Some(id), ..entity });
        assert_eq!(client.slice().snapshot().entity, fetched);
    }

    #[tokio::test]
    async fn test_create_strips_stale_id() {
        let client = client(MemoryApi::with_users());
        let mut entity = sample("Stale Identifier");
        entity.id = Some(500);

        let created = client.create_entity(entity).await.unwrap();
        assert_eq!(created.id, Some(1));
    }

    #[tokio::test]
    async fn test_load_more_accumulates_then_reset_replaces() {
        let client = client(MemoryApi::seeded(25));
        let mut pagination = PaginationState::new(10);

        client.get_entities(pagination.reset()).await.unwrap();
        let state = client.slice().snapshot();
        assert_eq!(state.entities.len(), 10);
        assert!(pagination.has_more(&state.links));

        let request = pagination.load_more(120.0, &state.links).unwrap();
        assert_eq!(request.mode, FetchMode::Append);
        client.get_entities(request).await.unwrap();

        let state = client.slice().snapshot();
        assert_eq!(ids(&state), (1..=20).collect::<Vec<_>>());
        assert_eq!(state.total_items, 25);

        client.create_entity(sample("Brand New Entry")).await.unwrap();
        assert!(client.slice().snapshot().update_success);

        client.get_entities(pagination.reset()).await.unwrap();
        let state = client.slice().snapshot();
        assert_eq!(ids(&state), (1..=10).collect::<Vec<_>>());
        assert!(!state.update_success);
        assert_eq!(pagination.active_page, 1);
    }

    #[tokio::test]
    async fn test_last_page_stops_infinite_scroll() {
        let client = client(MemoryApi::seeded(15));
        let mut pagination = PaginationState::new(10);

        client.get_entities(pagination.reset()).await.unwrap();
        let links = client.slice().snapshot().links;
        let request = pagination.load_more(50.0, &links).unwrap();
        client.get_entities(request).await.unwrap();

        let state = client.slice().snapshot();
        assert_eq!(state.entities.len(), 15);
        assert!(!pagination.has_more(&state.links));
        assert_eq!(pagination.load_more(50.0, &state.links), None);
    }

    #[tokio::test]
    async fn test_sort_click_fetches_with_new_sort() {
        let api = MemoryApi::seeded(3);
        let client = client(api);
        let mut pagination = PaginationState::default();

        client.get_entities(pagination.reset()).await.unwrap();
        client
            .get_entities(pagination.sort_by(SortField::Id))
            .await
            .unwrap();

        let query = client.api().last_query().unwrap();
        assert_eq!(query.sort.as_deref(), Some("id,desc"));
        assert_eq!(query.page, Some(0));
        assert_eq!(ids(&client.slice().snapshot()), vec![3, 2, 1]);
    }

    #[tokio::test]
    async fn test_failed_request_clears_flags() {
        let client = client(MemoryApi::seeded(2));

        client.api().fail_once();
        let result = client.get_entities(PaginationState::default().reset()).await;
        assert!(matches!(result, Err(ApiError::Network(_))));

        let state = client.slice().snapshot();
        assert!(!state.loading);
        assert!(state.error_message.is_some());

        client.api().fail_once();
        assert!(client.update_entity(sample("Failing update")).await.is_err());
        let state = client.slice().snapshot();
        assert!(!state.updating);
        assert!(!state.update_success);
    }

    #[tokio::test]
    async fn test_update_without_id_fails() {
        let client = client(MemoryApi::with_users());
        let result = client.update_entity(sample("Missing Identifier")).await;
        assert_eq!(result, Err(ApiError::MissingId));
    }

    #[tokio::test]
    async fn test_missing_entity_not_found() {
        let client = client(MemoryApi::with_users());
        assert_eq!(client.get_entity(9).await, Err(ApiError::NotFound(9)));
        assert_eq!(
            client.slice().snapshot().error_message.as_deref(),
            Some("Portfolio 9 not found")
        );
    }

    #[tokio::test]
    async fn test_partial_update_keeps_unset_fields() {
        let api = MemoryApi::with_users();
        let stored = api.insert(sample("Original Project"));
        let client = client(api);

        let patch = Portfolio {
            id: stored.id,
            link: "https://example.com/moved".to_string(),
            ..Portfolio::default()
        };
        let updated = client.partial_update_entity(patch).await.unwrap();

        assert_eq!(updated.project_name, "Original Project");
        assert_eq!(updated.link, "https://example.com/moved");
        assert!(client.slice().snapshot().update_success);
    }

    #[tokio::test]
    async fn test_delete_dialog_ignores_unrelated_success() {
        let api = MemoryApi::with_users();
        let target = api.insert(sample("Doomed Project"));
        let client = client(api);
        let id = target.id.unwrap();

        // An unrelated save leaves the flag up
        client.create_entity(sample("Unrelated Project")).await.unwrap();
        assert!(client.slice().snapshot().update_success);

        // Dialog mounts: arms, then loads its entity
        let mut latch = SuccessLatch::default();
        latch.arm(client.slice().snapshot().update_success);
        assert!(!latch.observe(client.slice().snapshot().update_success));

        client.get_entity(id).await.unwrap();
        assert!(!latch.observe(client.slice().snapshot().update_success));

        // Confirm
        client.delete_entity(id).await.unwrap();
        assert!(latch.observe(client.slice().snapshot().update_success));
        assert!(client.get_entity(id).await.is_err());
    }

    #[tokio::test]
    async fn test_delete_removes_requested_record_not_loaded_one() {
        let api = MemoryApi::with_users();
        let loaded = api.insert(sample("Loaded Project"));
        let target = api.insert(sample("Target Project"));
        let client = client(api);

        // A detail view left another record in the slice
        client.get_entity(loaded.id.unwrap()).await.unwrap();

        client.delete_entity(target.id.unwrap()).await.unwrap();
        assert!(client.get_entity(target.id.unwrap()).await.is_err());
        assert!(client.get_entity(loaded.id.unwrap()).await.is_ok());
    }

    #[tokio::test]
    async fn test_edit_flow_preserves_loaded_values() {
        let api = MemoryApi::with_users();
        let stored = api.insert(sample("Editable Project"));
        let client = client(api);
        let id = stored.id.unwrap();

        let loaded = client.get_entity(id).await.unwrap();
        let users = client.get_users().await.unwrap();
        let mut form = PortfolioForm::from_entity(&loaded);
        form.description = "Rewritten description".to_string();

        let entity = form.to_entity(FormMode::Edit(id), &users).unwrap();
        let saved = client.update_entity(entity).await.unwrap();

        assert_eq!(saved.project_name, "Editable Project");
        assert_eq!(saved.description, "Rewritten description");
        assert_eq!(saved.user, loaded.user);
        assert_eq!(client.get_entity(id).await.unwrap(), saved);
    }
}
