//! Application router configuration.

use axum::{
    Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};

use crate::{
    AppState,
    category::{
        create_category_endpoint, delete_category_endpoint, get_category_endpoint,
        list_categories_endpoint, seed_categories_endpoint, update_category_endpoint,
    },
    dashboard::get_dashboard_page,
    endpoints,
    expense::{
        create_expense_endpoint, delete_expense_endpoint, get_expense_endpoint,
        list_expenses_endpoint, patch_expense_endpoint, replace_expense_endpoint,
    },
    not_found::get_404_not_found,
    stores::{CategoryStore, ExpenseStore},
    summary::get_summary_endpoint,
};

/// Return a router with all the app's routes.
pub fn build_router<C, E>(state: AppState<C, E>) -> Router
where
    C: CategoryStore + Clone + Send + Sync + 'static,
    E: ExpenseStore + Clone + Send + Sync + 'static,
{
    Router::new()
        .route(endpoints::ROOT, get(get_dashboard_page::<C, E>))
        .route(endpoints::COFFEE, get(get_coffee))
        .route(
            endpoints::CATEGORIES_API,
            get(list_categories_endpoint::<C, E>).post(create_category_endpoint::<C, E>),
        )
        .route(
            endpoints::CATEGORY,
            get(get_category_endpoint::<C, E>)
                .put(update_category_endpoint::<C, E>)
                .delete(delete_category_endpoint::<C, E>),
        )
        .route(
            endpoints::EXPENSES_API,
            get(list_expenses_endpoint::<C, E>).post(create_expense_endpoint::<C, E>),
        )
        .route(
            endpoints::EXPENSE,
            get(get_expense_endpoint::<C, E>)
                .put(replace_expense_endpoint::<C, E>)
                .patch(patch_expense_endpoint::<C, E>)
                .delete(delete_expense_endpoint::<C, E>),
        )
        .route(endpoints::SUMMARY_API, get(get_summary_endpoint::<C, E>))
        .route(endpoints::SEED_API, post(seed_categories_endpoint::<C, E>))
        .fallback(get_404_not_found)
        .with_state(state)
}

/// Attempt to get a cup of coffee from the server.
async fn get_coffee() -> Response {
    (StatusCode::IM_A_TEAPOT, "I'm a teapot").into_response()
}

#[cfg(test)]
mod tests {
    use axum::http::{StatusCode, header::LOCATION};
    use axum_test::TestServer;
    use serde_json::{Value, json};

    use crate::{
        AppState, Category, Database, SeedReport,
        category::{CategoryName, CategoryPatch, NewCategory},
        endpoints::{self, format_endpoint},
        error::ErrorBody,
        expense::Expense,
        stores::{CategoryStore, StoreError},
        summary::CategorySummary,
    };

    use super::build_router;

    fn get_test_server() -> TestServer {
        let database = Database::open_in_memory().expect("Could not open database");
        let state = AppState::new(database.category_store(), database.expense_store(), "UTC");

        TestServer::try_new(build_router(state)).expect("Could not create test server.")
    }

    async fn create_category(server: &TestServer, name: &str) -> Category {
        server
            .post(endpoints::CATEGORIES_API)
            .json(&json!({ "name": name }))
            .await
            .json::<Category>()
    }

    async fn create_expense(server: &TestServer, body: Value) -> Expense {
        let response = server.post(endpoints::EXPENSES_API).json(&body).await;
        response.assert_status(StatusCode::CREATED);

        response.json::<Expense>()
    }

    #[tokio::test]
    async fn coffee_is_a_teapot() {
        let server = get_test_server();

        server
            .get(endpoints::COFFEE)
            .await
            .assert_status(StatusCode::IM_A_TEAPOT);
    }

    #[tokio::test]
    async fn unknown_path_is_json_not_found() {
        let server = get_test_server();

        let response = server.get("/api/nope").await;

        response.assert_status_not_found();
        assert!(!response.json::<ErrorBody>().error.is_empty());
    }

    #[tokio::test]
    async fn create_category_returns_created_with_location() {
        let server = get_test_server();

        let response = server
            .post(endpoints::CATEGORIES_API)
            .json(&json!({ "name": "  Pets ", "description": "" }))
            .await;

        response.assert_status(StatusCode::CREATED);
        let category = response.json::<Category>();
        assert_eq!(category.name.as_ref(), "Pets");
        assert_eq!(category.description, None);
        assert_eq!(
            response.header(LOCATION),
            format_endpoint(endpoints::CATEGORY, category.id)
        );
    }

    #[tokio::test]
    async fn create_category_rejects_blank_and_duplicate_names() {
        let server = get_test_server();
        create_category(&server, "Food").await;

        server
            .post(endpoints::CATEGORIES_API)
            .json(&json!({ "name": "   " }))
            .await
            .assert_status_bad_request();
        server
            .post(endpoints::CATEGORIES_API)
            .json(&json!({ "name": 5 }))
            .await
            .assert_status_bad_request();
        server
            .post(endpoints::CATEGORIES_API)
            .json(&json!({ "name": "food" }))
            .await
            .assert_status_bad_request();
    }

    #[tokio::test]
    async fn categories_are_listed_by_name() {
        let server = get_test_server();
        for name in ["Transport", "bills", "Food"] {
            create_category(&server, name).await;
        }

        let categories = server.get(endpoints::CATEGORIES_API).await.json::<Vec<Category>>();

        let names: Vec<&str> = categories.iter().map(|category| category.name.as_ref()).collect();
        assert_eq!(names, ["bills", "Food", "Transport"]);
    }

    #[tokio::test]
    async fn category_can_be_fetched_updated_and_deleted() {
        let server = get_test_server();
        let category = create_category(&server, "Fun").await;
        let path = format_endpoint(endpoints::CATEGORY, category.id);

        server.get(&path).await.assert_json(&category);

        let updated = server
            .put(&path)
            .json(&json!({ "description": "Going out" }))
            .await
            .json::<Category>();
        assert_eq!(updated.name, category.name);
        assert_eq!(updated.description.as_deref(), Some("Going out"));

        server.delete(&path).await.assert_status_ok();
        server.get(&path).await.assert_status_not_found();
    }

    #[tokio::test]
    async fn seed_creates_defaults_once() {
        let server = get_test_server();

        let first = server.post(endpoints::SEED_API).await.json::<SeedReport>();
        let second = server.post(endpoints::SEED_API).await.json::<SeedReport>();
        let categories = server.get(endpoints::CATEGORIES_API).await.json::<Vec<Category>>();

        assert_eq!(first.created.len(), 7);
        assert!(!first.all_existed);
        assert!(second.created.is_empty());
        assert!(second.all_existed);
        assert_eq!(categories.len(), 7);
    }

    #[tokio::test]
    async fn expense_round_trip() {
        let server = get_test_server();
        let food = create_category(&server, "Food").await;

        let created = create_expense(
            &server,
            json!({
                "amount": 23.75,
                "categoryId": food.id,
                "date": "2025-05-04",
                "description": "Dinner"
            }),
        )
        .await;
        let fetched = server
            .get(&format_endpoint(endpoints::EXPENSE, created.id))
            .await
            .json::<Expense>();

        assert_eq!(fetched, created);
        assert_eq!(fetched.amount, 23.75);
        assert_eq!(fetched.category, food);
        assert_eq!(fetched.description.as_deref(), Some("Dinner"));
        assert_eq!(fetched.date.date(), time::macros::date!(2025 - 05 - 04));
    }

    #[tokio::test]
    async fn create_expense_reports_first_invalid_field() {
        let server = get_test_server();

        let response = server
            .post(endpoints::EXPENSES_API)
            .json(&json!({ "amount": 0, "date": "nope" }))
            .await;

        response.assert_status_bad_request();
        assert_eq!(
            response.json::<ErrorBody>().error,
            "Amount must be a positive number"
        );
    }

    #[tokio::test]
    async fn missing_date_is_reported_before_non_numeric_category() {
        let server = get_test_server();

        let response = server
            .post(endpoints::EXPENSES_API)
            .json(&json!({ "amount": 5, "categoryId": "abc" }))
            .await;

        response.assert_status_bad_request();
        assert_eq!(response.json::<ErrorBody>().error, "Date is required");
    }

    #[tokio::test]
    async fn malformed_body_is_a_json_error() {
        let server = get_test_server();
        let food = create_category(&server, "Food").await;

        let response = server
            .post(endpoints::EXPENSES_API)
            .json(&json!({
                "amount": 5,
                "categoryId": food.id,
                "date": "2025-05-04",
                "description": 123
            }))
            .await;

        response.assert_status_bad_request();
        assert!(response.json::<ErrorBody>().error.starts_with("Invalid request body"));
        let expenses = server.get(endpoints::EXPENSES_API).await.json::<Vec<Expense>>();
        assert!(expenses.is_empty());
    }

    #[tokio::test]
    async fn non_numeric_id_is_a_json_error() {
        let server = get_test_server();

        for path in ["/api/expenses/abc", "/api/categories/abc"] {
            let response = server.get(path).await;

            response.assert_status_bad_request();
            assert!(
                response.json::<ErrorBody>().error.starts_with("Invalid path"),
                "{path}"
            );
        }
    }

    #[tokio::test]
    async fn create_expense_in_missing_category_is_unprocessable() {
        let server = get_test_server();

        server
            .post(endpoints::EXPENSES_API)
            .json(&json!({ "amount": 5, "categoryId": 404, "date": "2025-05-04" }))
            .await
            .assert_status(StatusCode::UNPROCESSABLE_ENTITY);

        let expenses = server.get(endpoints::EXPENSES_API).await.json::<Vec<Expense>>();
        assert!(expenses.is_empty());
    }

    #[tokio::test]
    async fn expenses_are_filtered_by_inclusive_dates() {
        let server = get_test_server();
        let food = create_category(&server, "Food").await;
        for date in [
            "2025-04-30T23:59:59Z",
            "2025-05-01",
            "2025-05-31T18:45:00Z",
            "2025-06-01",
        ] {
            create_expense(
                &server,
                json!({ "amount": 1, "categoryId": food.id, "date": date }),
            )
            .await;
        }

        let expenses = server
            .get(endpoints::EXPENSES_API)
            .add_query_param("startDate", "2025-05-01")
            .add_query_param("endDate", "2025-05-31")
            .await
            .json::<Vec<Expense>>();

        let days: Vec<String> = expenses
            .iter()
            .map(|expense| expense.date.date().to_string())
            .collect();
        assert_eq!(days, ["2025-05-31", "2025-05-01"]);
    }

    #[tokio::test]
    async fn malformed_filter_is_a_bad_request() {
        let server = get_test_server();

        server
            .get(endpoints::SUMMARY_API)
            .add_query_param("endDate", "31/05/2025")
            .await
            .assert_status_bad_request();
    }

    #[tokio::test]
    async fn patch_expense_changes_only_description() {
        let server = get_test_server();
        let food = create_category(&server, "Food").await;
        let created = create_expense(
            &server,
            json!({ "amount": 9.5, "categoryId": food.id, "date": "2025-05-04" }),
        )
        .await;
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;

        let updated = server
            .patch(&format_endpoint(endpoints::EXPENSE, created.id))
            .json(&json!({ "description": "new text" }))
            .await
            .json::<Expense>();

        assert_eq!(updated.amount, created.amount);
        assert_eq!(updated.category_id, created.category_id);
        assert_eq!(updated.date, created.date);
        assert_eq!(updated.description.as_deref(), Some("new text"));
        assert!(updated.updated_at > created.updated_at);
    }

    #[tokio::test]
    async fn put_expense_validates_like_create() {
        let server = get_test_server();
        let food = create_category(&server, "Food").await;
        let created = create_expense(
            &server,
            json!({ "amount": 9.5, "categoryId": food.id, "date": "2025-05-04" }),
        )
        .await;
        let path = format_endpoint(endpoints::EXPENSE, created.id);

        server
            .put(&path)
            .json(&json!({ "amount": 3, "categoryId": food.id }))
            .await
            .assert_status_bad_request();

        let replaced = server
            .put(&path)
            .json(&json!({ "amount": 3, "categoryId": food.id, "date": "2025-05-05" }))
            .await
            .json::<Expense>();
        assert_eq!(replaced.amount, 3.0);
        assert_eq!(replaced.description, None);
    }

    #[tokio::test]
    async fn updating_missing_expense_is_not_found() {
        let server = get_test_server();

        server
            .put(&format_endpoint(endpoints::EXPENSE, 77))
            .json(&json!({ "amount": 3, "categoryId": 1, "date": "2025-05-05" }))
            .await
            .assert_status_not_found();
    }

    #[tokio::test]
    async fn deleted_category_becomes_unknown_in_listing() {
        let server = get_test_server();
        let food = create_category(&server, "Food").await;
        create_expense(
            &server,
            json!({ "amount": 2, "categoryId": food.id, "date": "2025-05-04" }),
        )
        .await;

        server
            .delete(&format_endpoint(endpoints::CATEGORY, food.id))
            .await
            .assert_status_ok();

        let expenses = server.get(endpoints::EXPENSES_API).await.json::<Vec<Expense>>();
        assert_eq!(expenses[0].category.name.as_ref(), "Unknown");
    }

    #[tokio::test]
    async fn delete_expense_confirms() {
        let server = get_test_server();
        let food = create_category(&server, "Food").await;
        let created = create_expense(
            &server,
            json!({ "amount": 2, "categoryId": food.id, "date": "2025-05-04" }),
        )
        .await;
        let path = format_endpoint(endpoints::EXPENSE, created.id);

        let response = server.delete(&path).await;

        response.assert_status_ok();
        assert!(response.json::<Value>()["message"].is_string());
        server.get(&path).await.assert_status_not_found();
    }

    #[tokio::test]
    async fn summary_totals_match_expenses() {
        let server = get_test_server();
        let food = create_category(&server, "Food").await;
        let snacks = create_category(&server, "Snacks").await;
        for (category, amount) in [(&food, 10.0), (&snacks, 2.5), (&food, 5.0)] {
            create_expense(
                &server,
                json!({ "amount": amount, "categoryId": category.id, "date": "2025-05-04" }),
            )
            .await;
        }

        let summary = server.get(endpoints::SUMMARY_API).await.json::<Vec<CategorySummary>>();

        let total: f64 = summary.iter().map(|row| row.total).sum();
        let count: usize = summary.iter().map(|row| row.count).sum();
        assert_eq!(summary.len(), 2);
        assert_eq!(total, 17.5);
        assert_eq!(count, 3);
    }

    #[tokio::test]
    async fn dashboard_is_served_at_root() {
        let server = get_test_server();

        let response = server.get(endpoints::ROOT).await;

        response.assert_status_ok();
        assert!(response.text().contains("Expense Tracker"));
    }

    /// A store that fails every call with the same error.
    #[derive(Clone)]
    struct FailingStore(StoreError);

    impl CategoryStore for FailingStore {
        fn list(&self) -> Result<Vec<Category>, StoreError> {
            Err(self.0.clone())
        }

        fn get(&self, _: i64) -> Result<Option<Category>, StoreError> {
            Err(self.0.clone())
        }

        fn create(&self, _: NewCategory) -> Result<Category, StoreError> {
            Err(self.0.clone())
        }

        fn update(&self, _: i64, _: CategoryPatch) -> Result<(), StoreError> {
            Err(self.0.clone())
        }

        fn delete(&self, _: i64) -> Result<(), StoreError> {
            Err(self.0.clone())
        }
    }

    fn get_failing_server(error: StoreError) -> TestServer {
        let database = Database::open_in_memory().expect("Could not open database");
        let state = AppState::new(FailingStore(error), database.expense_store(), "UTC");

        TestServer::try_new(build_router(state)).expect("Could not create test server.")
    }

    #[tokio::test]
    async fn store_errors_have_distinct_statuses() {
        let unavailable = get_failing_server(StoreError::Unavailable("closed".to_owned()));
        let denied = get_failing_server(StoreError::PermissionDenied("read only".to_owned()));

        unavailable
            .get(endpoints::CATEGORIES_API)
            .await
            .assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        denied
            .post(endpoints::SEED_API)
            .await
            .assert_status(StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn invalid_timezone_is_a_server_error() {
        let database = Database::open_in_memory().expect("Could not open database");
        let state = AppState::new(
            database.category_store(),
            database.expense_store(),
            "Not/A_Zone",
        );
        let server = TestServer::try_new(build_router(state)).expect("Could not create test server.");

        server
            .get(endpoints::EXPENSES_API)
            .await
            .assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn category_name_is_serialized_as_text() {
        let category = Category {
            id: 1,
            name: CategoryName::new_unchecked("Food"),
            description: None,
        };

        assert_eq!(
            serde_json::to_value(&category).unwrap(),
            json!({ "id": 1, "name": "Food", "description": null })
        );
    }
}
