//! OpenAPI 3.0 description of the HTTP surface, served as plain JSON.

use axum::Json;
use axum::extract::State;
use serde_json::{Value as JsonValue, json};

use crate::state::AppState;

pub async fn api_docs(State(state): State<AppState>) -> Json<JsonValue> {
    Json(openapi_document(&state.server_url))
}

/// Builds the document. Only `servers[0].url` varies between calls.
#[must_use]
pub fn openapi_document(server_url: &str) -> JsonValue {
    json!({
        "openapi": "3.0.0",
        "info": {
            "title": "TaskFlow API",
            "description": "Task Management API",
            "version": env!("CARGO_PKG_VERSION"),
        },
        "servers": [
            { "url": server_url, "description": "Development server" }
        ],
        "components": {
            "schemas": {
                "Task": task_schema(),
                "Category": category_schema(),
                "Error": {
                    "type": "object",
                    "properties": { "error": { "type": "string" } },
                },
            },
        },
        "paths": {
            "/api/tasks": task_collection_path(),
            "/api/tasks/{id}": task_item_path(),
            "/api/tasks/{id}/complete": task_completion_path(),
            "/api/categories": category_collection_path(),
            "/api/categories/{id}": category_item_path(),
            "/api/stats": stats_path(),
            "/health": health_path(),
        },
    })
}

// =============================================================================
// Paths
// =============================================================================

fn task_collection_path() -> JsonValue {
    json!({
        "get": {
            "summary": "Get all tasks",
            "tags": ["Tasks"],
            "responses": {
                "200": json_response("List of all tasks", array_of("Task")),
            },
        },
        "post": {
            "summary": "Create a new task",
            "tags": ["Tasks"],
            "requestBody": json_body(json!({
                "type": "object",
                "required": ["title"],
                "properties": {
                    "title": { "type": "string" },
                    "description": { "type": "string" },
                    "categoryId": { "type": "string" },
                    "priority": priority_schema(),
                },
            })),
            "responses": {
                "201": json_response("Task created successfully", schema_ref("Task")),
                "400": error_response("Title missing or priority invalid"),
            },
        },
    })
}

fn task_item_path() -> JsonValue {
    json!({
        "get": {
            "summary": "Get a task by ID",
            "tags": ["Tasks"],
            "parameters": [id_parameter()],
            "responses": {
                "200": json_response("Task details", schema_ref("Task")),
                "404": error_response("Task not found"),
            },
        },
        "put": {
            "summary": "Update a task",
            "tags": ["Tasks"],
            "parameters": [id_parameter()],
            "requestBody": json_body(json!({
                "type": "object",
                "properties": {
                    "title": { "type": "string" },
                    "description": { "type": "string" },
                    "completed": { "type": "boolean" },
                    "priority": priority_schema(),
                },
            })),
            "responses": {
                "200": json_response("Task updated successfully", schema_ref("Task")),
                "400": error_response("Priority invalid"),
                "404": error_response("Task not found"),
            },
        },
        "delete": {
            "summary": "Delete a task",
            "tags": ["Tasks"],
            "parameters": [id_parameter()],
            "responses": {
                "204": { "description": "Task deleted successfully" },
                "404": error_response("Task not found"),
            },
        },
    })
}

fn task_completion_path() -> JsonValue {
    json!({
        "patch": {
            "summary": "Toggle task completion status",
            "tags": ["Tasks"],
            "parameters": [id_parameter()],
            "responses": {
                "200": json_response("Task toggled successfully", schema_ref("Task")),
                "404": error_response("Task not found"),
            },
        },
    })
}

fn category_collection_path() -> JsonValue {
    json!({
        "get": {
            "summary": "Get all categories",
            "tags": ["Categories"],
            "responses": {
                "200": json_response("List of all categories", array_of("Category")),
            },
        },
        "post": {
            "summary": "Create a new category",
            "tags": ["Categories"],
            "requestBody": json_body(json!({
                "type": "object",
                "required": ["name"],
                "properties": {
                    "name": { "type": "string" },
                    "color": { "type": "string" },
                },
            })),
            "responses": {
                "201": json_response("Category created successfully", schema_ref("Category")),
                "400": error_response("Name missing"),
            },
        },
    })
}

fn category_item_path() -> JsonValue {
    json!({
        "delete": {
            "summary": "Delete a category",
            "tags": ["Categories"],
            "parameters": [id_parameter()],
            "responses": {
                "204": { "description": "Category deleted successfully" },
                "404": error_response("Category not found"),
            },
        },
    })
}

fn stats_path() -> JsonValue {
    json!({
        "get": {
            "summary": "Get application statistics",
            "tags": ["Statistics"],
            "responses": {
                "200": json_response("Statistics data", json!({
                    "type": "object",
                    "properties": {
                        "totalTasks": { "type": "integer" },
                        "completedTasks": { "type": "integer" },
                        "pendingTasks": { "type": "integer" },
                        "completionRate": { "type": "integer" },
                        "totalCategories": { "type": "integer" },
                    },
                })),
            },
        },
    })
}

fn health_path() -> JsonValue {
    json!({
        "get": {
            "summary": "Health check",
            "tags": ["Health"],
            "responses": {
                "200": json_response("Server is running", json!({
                    "type": "object",
                    "properties": {
                        "status": { "type": "string" },
                        "message": { "type": "string" },
                    },
                })),
            },
        },
    })
}

// =============================================================================
// Schema Fragments
// =============================================================================

fn task_schema() -> JsonValue {
    json!({
        "type": "object",
        "properties": {
            "id": { "type": "string" },
            "title": { "type": "string" },
            "description": { "type": "string" },
            "completed": { "type": "boolean" },
            "categoryId": { "type": "string" },
            "priority": priority_schema(),
            "createdAt": { "type": "string", "format": "date-time" },
        },
    })
}

fn category_schema() -> JsonValue {
    json!({
        "type": "object",
        "properties": {
            "id": { "type": "string" },
            "name": { "type": "string" },
            "color": { "type": "string" },
        },
    })
}

fn priority_schema() -> JsonValue {
    json!({ "type": "string", "enum": ["low", "medium", "high"] })
}

fn schema_ref(name: &str) -> JsonValue {
    json!({ "$ref": format!("#/components/schemas/{name}") })
}

fn array_of(name: &str) -> JsonValue {
    json!({ "type": "array", "items": schema_ref(name) })
}

fn id_parameter() -> JsonValue {
    json!({
        "in": "path",
        "name": "id",
        "required": true,
        "schema": { "type": "string" },
    })
}

fn json_body(schema: JsonValue) -> JsonValue {
    json!({
        "required": true,
        "content": { "application/json": { "schema": schema } },
    })
}

fn json_response(description: &str, schema: JsonValue) -> JsonValue {
    json!({
        "description": description,
        "content": { "application/json": { "schema": schema } },
    })
}

fn error_response(description: &str) -> JsonValue {
    json_response(description, schema_ref("Error"))
}

// =============================================================================
// Tests
// =============================================================================
