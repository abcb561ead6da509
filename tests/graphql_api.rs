use async_graphql::{Context, EmptyMutation, EmptySubscription, Object, Request, Schema, Variables};
use serde_json::{json, Value};
use taskql::db::db::Db;
use taskql::graphql::{build_schema, run_blocking, TaskSchema};
use taskql::libs::service::TaskService;
use tempfile::TempDir;

struct Api {
    _temp_dir: TempDir,
    db: Db,
    schema: TaskSchema,
}

impl Api {
    fn new() -> Self {
        let temp_dir = tempfile::tempdir().unwrap();
        let db = Db::open(temp_dir.path().join("api.db")).unwrap();
        let schema = build_schema(TaskService::new(db.clone()).unwrap());
        Api {
            _temp_dir: temp_dir,
            db,
            schema,
        }
    }

    async fn run(&self, query: &str, variables: Value) -> Value {
        let request = Request::new(query).variables(Variables::from_json(variables));
        serde_json::to_value(self.schema.execute(request).await).unwrap()
    }

    async fn ok(&self, query: &str, variables: Value) -> Value {
        let response = self.run(query, variables).await;
        assert!(response.get("errors").is_none(), "unexpected errors: {}", response);
        response["data"].clone()
    }

    async fn create(&self, input: Value) -> Value {
        let data = self
            .ok(
                "mutation($input: CreateTaskInput!) { createTask(input: $input) { id title description completed priority createdAt updatedAt } }",
                json!({ "input": input }),
            )
            .await;
        data["createTask"].clone()
    }
}

fn error_code(response: &Value) -> &str {
    response["errors"][0]["extensions"]["code"].as_str().unwrap_or_default()
}

fn pause() -> tokio::time::Sleep {
    tokio::time::sleep(std::time::Duration::from_millis(5))
}

#[tokio::test]
async fn create_then_delete_buy_milk() {
    let api = Api::new();
    let task = api.create(json!({ "title": "Buy milk" })).await;

    assert_eq!(task["title"], "Buy milk");
    assert_eq!(task["priority"], "MEDIUM");
    assert_eq!(task["completed"], false);
    assert_eq!(task["description"], Value::Null);
    assert_eq!(task["createdAt"], task["updatedAt"]);

    let id = task["id"].clone();
    let data = api.ok("mutation($id: ID!) { deleteTask(id: $id) }", json!({ "id": id })).await;
    assert_eq!(data["deleteTask"], true);

    let data = api.ok("query($id: ID!) { task(id: $id) { id } }", json!({ "id": id })).await;
    assert_eq!(data["task"], Value::Null);

    let data = api.ok("mutation($id: ID!) { deleteTask(id: $id) }", json!({ "id": id })).await;
    assert_eq!(data["deleteTask"], true);
}

#[tokio::test]
async fn tasks_by_priority_separates_levels() {
    let api = Api::new();
    let high = api.create(json!({ "title": "urgent", "priority": "HIGH" })).await;
    let low = api.create(json!({ "title": "later", "priority": "LOW" })).await;

    let data = api
        .ok("query($p: Priority!) { tasksByPriority(priority: $p) { id priority } }", json!({ "p": "HIGH" }))
        .await;
    assert_eq!(data["tasksByPriority"], json!([{ "id": high["id"], "priority": "HIGH" }]));

    let data = api
        .ok("query($p: Priority!) { tasksByPriority(priority: $p) { id priority } }", json!({ "p": "LOW" }))
        .await;
    assert_eq!(data["tasksByPriority"], json!([{ "id": low["id"], "priority": "LOW" }]));
}

#[tokio::test]
async fn update_completed_keeps_title_and_advances_updated_at() {
    let api = Api::new();
    let task = api.create(json!({ "title": "Write report", "description": "quarterly" })).await;
    pause().await;

    let data = api
        .ok(
            "mutation($id: ID!) { updateTask(id: $id, input: { completed: true }) { title description completed createdAt updatedAt } }",
            json!({ "id": task["id"] }),
        )
        .await;
    let updated = &data["updateTask"];
    assert_eq!(updated["title"], "Write report");
    assert_eq!(updated["description"], "quarterly");
    assert_eq!(updated["completed"], true);
    assert_eq!(updated["createdAt"], task["createdAt"]);
    assert!(updated["updatedAt"].as_str().unwrap() > task["updatedAt"].as_str().unwrap());
}

#[tokio::test]
async fn update_with_null_description_clears_it() {
    let api = Api::new();
    let task = api.create(json!({ "title": "Described", "description": "text" })).await;

    let data = api
        .ok(
            "mutation($id: ID!, $input: UpdateTaskInput!) { updateTask(id: $id, input: $input) { description } }",
            json!({ "id": task["id"], "input": { "description": null } }),
        )
        .await;
    assert_eq!(data["updateTask"]["description"], Value::Null);
}

#[tokio::test]
async fn toggle_twice_restores_completed() {
    let api = Api::new();
    let task = api.create(json!({ "title": "Flip" })).await;
    let query = "mutation($id: ID!) { toggleTaskComplete(id: $id) { completed updatedAt } }";

    pause().await;
    let once = api.ok(query, json!({ "id": task["id"] })).await["toggleTaskComplete"].clone();
    pause().await;
    let twice = api.ok(query, json!({ "id": task["id"] })).await["toggleTaskComplete"].clone();

    assert_eq!(once["completed"], true);
    assert_eq!(twice["completed"], false);
    assert!(twice["updatedAt"].as_str().unwrap() > once["updatedAt"].as_str().unwrap());
}

#[tokio::test]
async fn tasks_filter_and_order() {
    let api = Api::new();
    let first = api.create(json!({ "title": "first" })).await;
    pause().await;
    let second = api.create(json!({ "title": "second" })).await;
    api.ok("mutation($id: ID!) { toggleTaskComplete(id: $id) { id } }", json!({ "id": second["id"] }))
        .await;

    let data = api.ok("{ tasks { id } }", json!({})).await;
    assert_eq!(data["tasks"], json!([{ "id": second["id"] }, { "id": first["id"] }]));

    let data = api.ok("{ tasks(completed: true) { id completed } }", json!({})).await;
    assert_eq!(data["tasks"], json!([{ "id": second["id"], "completed": true }]));

    let data = api.ok("{ tasks(completed: false) { id } }", json!({})).await;
    assert_eq!(data["tasks"], json!([{ "id": first["id"] }]));
}

#[tokio::test]
async fn search_is_case_insensitive() {
    let api = Api::new();
    api.create(json!({ "title": "FOO in title" })).await;
    api.create(json!({ "title": "other", "description": "has foo inside" })).await;
    api.create(json!({ "title": "nothing here" })).await;

    let data = api.ok("{ searchTasks(query: \"Foo\") { title } }", json!({})).await;
    assert_eq!(data["searchTasks"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn task_stats_counts() {
    let api = Api::new();
    api.create(json!({ "title": "a", "priority": "HIGH" })).await;
    let b = api.create(json!({ "title": "b" })).await;
    api.ok("mutation($id: ID!) { toggleTaskComplete(id: $id) { id } }", json!({ "id": b["id"] }))
        .await;

    let data = api.ok("{ taskStats { total completed pending highPriority } }", json!({})).await;
    assert_eq!(
        data["taskStats"],
        json!({ "total": 2, "completed": 1, "pending": 1, "highPriority": 1 })
    );
}

#[tokio::test]
async fn blank_title_is_bad_user_input() {
    let api = Api::new();
    let response = api
        .run("mutation { createTask(input: { title: \"   \" }) { id } }", json!({}))
        .await;
    assert_eq!(error_code(&response), "BAD_USER_INPUT");

    let data = api.ok("{ taskStats { total } }", json!({})).await;
    assert_eq!(data["taskStats"]["total"], 0);
}

#[tokio::test]
async fn missing_task_is_not_found() {
    let api = Api::new();
    let response = api
        .run("mutation { updateTask(id: \"missing\", input: { title: \"x\" }) { id } }", json!({}))
        .await;
    assert_eq!(error_code(&response), "NOT_FOUND");
    assert!(response["errors"][0]["message"].as_str().unwrap().contains("missing"));

    let response = api.run("mutation { toggleTaskComplete(id: \"missing\") { id } }", json!({})).await;
    assert_eq!(error_code(&response), "NOT_FOUND");

    let data = api.ok("{ task(id: \"missing\") { id } }", json!({})).await;
    assert_eq!(data["task"], Value::Null);
}

#[tokio::test]
async fn unknown_priority_is_rejected_before_resolving() {
    let api = Api::new();
    let response = api
        .run(
            "mutation($input: CreateTaskInput!) { createTask(input: $input) { id } }",
            json!({ "input": { "title": "x", "priority": "URGENT" } }),
        )
        .await;
    assert!(response["errors"].as_array().is_some_and(|errors| !errors.is_empty()));

    let data = api.ok("{ taskStats { total } }", json!({})).await;
    assert_eq!(data["taskStats"]["total"], 0);
}

#[tokio::test]
async fn storage_failure_is_internal_error() {
    let api = Api::new();
    api.create(json!({ "title": "doomed" })).await;
    api.db.conn().execute("DROP TABLE tasks", []).unwrap();

    let response = api.run("{ tasks { id } }", json!({})).await;
    assert_eq!(error_code(&response), "INTERNAL_SERVER_ERROR");
    assert_eq!(response["errors"][0]["message"], "Internal server error");
    assert!(!response.to_string().contains("no such table"));
}

struct PanickingQuery;

#[Object]
impl PanickingQuery {
    async fn explode(&self, ctx: &Context<'_>) -> async_graphql::Result<bool> {
        run_blocking(ctx, |_| panic!("service blew up")).await
    }

    async fn alive(&self) -> bool {
        true
    }
}

#[tokio::test]
async fn panicking_service_call_is_internal_error() {
    let service = TaskService::new(Db::in_memory().unwrap()).unwrap();
    let schema = Schema::build(PanickingQuery, EmptyMutation, EmptySubscription).data(service).finish();

    let response = serde_json::to_value(schema.execute("{ explode }").await).unwrap();
    assert_eq!(error_code(&response), "INTERNAL_SERVER_ERROR");
    assert_eq!(response["errors"][0]["message"], "Internal server error");

    let response = serde_json::to_value(schema.execute("{ alive }").await).unwrap();
    assert_eq!(response["data"]["alive"], true);
}
