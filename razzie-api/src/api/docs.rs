//! OpenAPI description of the service

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

use crate::AppState;

/// Where the OpenAPI document is served
pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

/// OpenAPI 3.0 document for every public route
#[must_use]
pub fn openapi_document() -> Value {
    let error_response = |description: &str| {
        json!({
            "description": description,
            "content": {"application/json": {"schema": {"$ref": "#/components/schemas/ErrorResponse"}}}
        })
    };

    json!({
      "openapi": "3.0.3",
      "info": {
        "title": "Golden Raspberry Awards API",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "Producer award intervals and nominee list aggregates for the Golden Raspberry Awards"
      },
      "tags": [
        {"name": "Awards", "description": "Producer award intervals"},
        {"name": "Movies", "description": "Nominee list queries"}
      ],
      "paths": {
        "/api/awards/producer-intervals": {
          "get": {
            "tags": ["Awards"],
            "summary": "Producers with the shortest and longest gap between consecutive wins",
            "responses": {
              "200": {
                "description": "Every interval equal to the minimum and every interval equal to the maximum",
                "content": {
                  "application/json": {
                    "schema": {"$ref": "#/components/schemas/AwardIntervalsResponse"},
                    "example": {
                      "min": [{"producers": "Joel Silver", "interval": 1, "previousWin": 1990, "followingWin": 1991}],
                      "max": [{"producers": "Matthew Vaughn", "interval": 13, "previousWin": 2002, "followingWin": 2015}]
                    }
                  }
                }
              },
              "400": error_response("Stored win record failed validation"),
              "500": error_response("Error getting awards ranges")
            }
          }
        },
        "/api/movies": {
          "get": {
            "tags": ["Movies"],
            "summary": "Paged nominee list",
            "parameters": [
              {"name": "page", "in": "query", "schema": {"type": "integer", "minimum": 0, "default": 0}},
              {"name": "size", "in": "query", "schema": {"type": "integer", "minimum": 1, "maximum": 100, "default": 10}},
              {"name": "winner", "in": "query", "schema": {"type": "boolean"}},
              {"name": "year", "in": "query", "schema": {"type": "integer"}}
            ],
            "responses": {
              "200": {
                "description": "One page of movies",
                "content": {"application/json": {"schema": {"$ref": "#/components/schemas/MoviePage"}}}
              },
              "400": error_response("Invalid query parameter")
            }
          }
        },
        "/api/movies/yearsWithMultipleWinners": {
          "get": {
            "tags": ["Movies"],
            "summary": "Years with more than one winning movie",
            "responses": {
              "200": {
                "description": "Years ordered ascending",
                "content": {"application/json": {"schema": {"$ref": "#/components/schemas/YearsWithMultipleWinners"}}}
              },
              "500": error_response("Data access failure")
            }
          }
        },
        "/api/movies/studiosWithWinCount": {
          "get": {
            "tags": ["Movies"],
            "summary": "Studios ranked by winning movies",
            "responses": {
              "200": {
                "description": "Studios ordered by win count descending, then name",
                "content": {"application/json": {"schema": {"$ref": "#/components/schemas/StudiosWithWinCount"}}}
              },
              "500": error_response("Data access failure")
            }
          }
        },
        "/api/movies/winnersByYear": {
          "get": {
            "tags": ["Movies"],
            "summary": "Winning movies of one year",
            "parameters": [
              {"name": "year", "in": "query", "required": true, "schema": {"type": "integer"}}
            ],
            "responses": {
              "200": {
                "description": "Winning movies",
                "content": {"application/json": {"schema": {"type": "array", "items": {"$ref": "#/components/schemas/Movie"}}}}
              },
              "400": error_response("Missing or invalid year")
            }
          }
        },
        "/health": {
          "get": {
            "responses": {"200": {"description": "Service status, module name and version"}}
          }
        },
        OPENAPI_PATH: {
          "get": {
            "responses": {"200": {"description": "This document"}}
          }
        }
      },
      "components": {
        "schemas": {
          "AwardInterval": {
            "type": "object",
            "required": ["producers", "interval", "previousWin", "followingWin"],
            "properties": {
              "producers": {"type": "string", "example": "Joel Silver"},
              "interval": {"type": "integer", "description": "Years between the two wins", "example": 1},
              "previousWin": {"type": "integer", "example": 1990},
              "followingWin": {"type": "integer", "example": 1991}
            }
          },
          "AwardIntervalsResponse": {
            "type": "object",
            "required": ["min", "max"],
            "properties": {
              "min": {"type": "array", "items": {"$ref": "#/components/schemas/AwardInterval"}},
              "max": {"type": "array", "items": {"$ref": "#/components/schemas/AwardInterval"}}
            }
          },
          "ErrorResponse": {
            "type": "object",
            "required": ["message", "error"],
            "properties": {
              "message": {"type": "string", "example": "Error getting awards ranges"},
              "error": {"type": "string"}
            }
          },
          "Movie": {
            "type": "object",
            "properties": {
              "id": {"type": "integer"},
              "year": {"type": "integer"},
              "title": {"type": "string"},
              "studios": {"type": "array", "items": {"type": "string"}},
              "producers": {"type": "array", "items": {"type": "string"}},
              "winner": {"type": "boolean"}
            }
          },
          "MoviePage": {
            "type": "object",
            "properties": {
              "content": {"type": "array", "items": {"$ref": "#/components/schemas/Movie"}},
              "totalElements": {"type": "integer"},
              "totalPages": {"type": "integer"},
              "number": {"type": "integer"},
              "size": {"type": "integer"},
              "numberOfElements": {"type": "integer"},
              "first": {"type": "boolean"},
              "last": {"type": "boolean"},
              "empty": {"type": "boolean"}
            }
          },
          "StudiosWithWinCount": {
            "type": "object",
            "properties": {
              "studios": {
                "type": "array",
                "items": {
                  "type": "object",
                  "properties": {"name": {"type": "string"}, "winCount": {"type": "integer"}}
                }
              }
            }
          },
          "YearsWithMultipleWinners": {
            "type": "object",
            "properties": {
              "years": {
                "type": "array",
                "items": {
                  "type": "object",
                  "properties": {"year": {"type": "integer"}, "winnerCount": {"type": "integer"}}
                }
              }
            }
          }
        }
      }
    })
}

/// GET /api-docs/openapi.json
pub async fn openapi_json() -> Json<Value> {
    Json(openapi_document())
}

/// Build API documentation routes
pub fn docs_routes() -> Router<AppState> {
    Router::new().route(OPENAPI_PATH, get(openapi_json))
}
