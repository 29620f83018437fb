use axum::response::{Html, Json};
use serde_json::{json, Value};

/// OpenAPI 3.0 description of the airplane endpoints
pub fn document() -> Value {
    let message = json!({ "$ref": "#/components/schemas/Message" });
    let confirmation = json!({ "$ref": "#/components/schemas/Confirmation" });
    let id_param = json!({
        "name": "id",
        "in": "path",
        "required": true,
        "description": "Airplane identifier",
        "schema": { "type": "string", "example": "90" }
    });

    json!({
        "openapi": "3.0.3",
        "info": {
            "title": "Airplane API",
            "description": "API for managing airplane records",
            "version": env!("CARGO_PKG_VERSION"),
            "license": { "name": "MIT" }
        },
        "paths": {
            "/airplanes": {
                "get": {
                    "summary": "List every stored airplane",
                    "operationId": "listAirplanes",
                    "responses": {
                        "200": response("Stored airplanes", json!({
                            "type": "array",
                            "items": { "$ref": "#/components/schemas/Airplane" }
                        }))
                    }
                },
                "post": {
                    "summary": "Save a new airplane",
                    "operationId": "createAirplane",
                    "requestBody": request_body("#/components/schemas/NewAirplane", json!({
                        "producerName": "Boeing",
                        "modelName": "B787",
                        "passengerCapacity": 350
                    })),
                    "responses": {
                        "200": response("The airplane was saved", confirmation.clone()),
                        "400": response("Invalid data", message.clone())
                    }
                },
                "put": {
                    "summary": "Replace an existing airplane",
                    "operationId": "updateAirplane",
                    "requestBody": request_body("#/components/schemas/Airplane", json!({
                        "id": 90,
                        "producerName": "Boeing",
                        "modelName": "B737",
                        "passengerCapacity": 200
                    })),
                    "responses": {
                        "200": response("The airplane was updated", confirmation.clone()),
                        "400": response("The airplane could not be updated", message.clone()),
                        "404": response("No airplane with that identifier", message.clone())
                    }
                }
            },
            "/airplanes/{id}": {
                "get": {
                    "summary": "Get an airplane by identifier",
                    "operationId": "getAirplane",
                    "parameters": [id_param.clone()],
                    "responses": {
                        "200": response("The stored airplane", json!({
                            "$ref": "#/components/schemas/Airplane"
                        })),
                        "400": response("Invalid identifier", message.clone()),
                        "404": response("Airplane not found", message.clone())
                    }
                },
                "delete": {
                    "summary": "Delete an airplane by identifier",
                    "operationId": "deleteAirplane",
                    "parameters": [id_param],
                    "responses": {
                        "200": response("The airplane was deleted", confirmation),
                        "400": response("Invalid identifier", message.clone()),
                        "404": response("Airplane not found", message)
                    }
                }
            }
        },
        "components": {
            "schemas": {
                "Airplane": {
                    "type": "object",
                    "required": ["id", "passengerCapacity"],
                    "properties": {
                        "id": { "type": "integer", "format": "int32", "example": 7 },
                        "producerName": { "type": "string", "nullable": true, "example": "Boeing" },
                        "modelName": { "type": "string", "nullable": true, "example": "B737" },
                        "passengerCapacity": { "type": "integer", "format": "int32", "example": 200 }
                    }
                },
                "NewAirplane": {
                    "type": "object",
                    "required": ["passengerCapacity"],
                    "properties": {
                        "producerName": { "type": "string", "nullable": true },
                        "modelName": { "type": "string", "nullable": true },
                        "passengerCapacity": { "type": "integer", "format": "int32" }
                    }
                },
                "Confirmation": {
                    "type": "object",
                    "required": ["message", "id"],
                    "properties": {
                        "message": { "type": "string" },
                        "id": { "type": "integer", "format": "int32" }
                    }
                },
                "Message": {
                    "type": "object",
                    "required": ["message"],
                    "properties": { "message": { "type": "string" } }
                }
            }
        }
    })
}

fn response(description: &str, schema: Value) -> Value {
    json!({
        "description": description,
        "content": { "application/json": { "schema": schema } }
    })
}

fn request_body(schema_ref: &str, example: Value) -> Value {
    json!({
        "required": true,
        "content": {
            "application/json": {
                "schema": { "$ref": schema_ref },
                "example": example
            }
        }
    })
}

/// GET /openapi.json
pub async fn openapi_json() -> Json<Value> {
    Json(document())
}

/// GET /docs - Swagger UI pointed at /openapi.json
pub async fn docs() -> Html<&'static str> {
    Html(SWAGGER_UI)
}

const SWAGGER_UI: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <title>Airplane API</title>
  <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css" />
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
  <script>
    window.onload = () => {
      window.ui = SwaggerUIBundle({ url: "/openapi.json", dom_id: "#swagger-ui" });
    };
  </script>
</body>
</html>
"##;
