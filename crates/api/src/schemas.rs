//! JSON schemas embedded in body-carrying hypermedia controls.
//!
//! These describe the request bodies to API clients; server-side
//! enforcement is the typed DTOs plus their `Validate` rules, which these
//! schemas mirror.

use serde_json::{json, Value};

pub fn user_schema() -> Value {
    json!({
        "type": "object",
        "required": ["username"],
        "properties": {
            "username": {
                "description": "Unique username",
                "type": "string",
                "minLength": 1,
                "maxLength": 64
            }
        }
    })
}

pub fn move_schema() -> Value {
    json!({
        "type": "object",
        "required": ["name", "description"],
        "properties": {
            "name": {
                "description": "Name of the move, unique per creator",
                "type": "string",
                "minLength": 1,
                "maxLength": 64
            },
            "description": {
                "description": "How to perform the move",
                "type": "string",
                "minLength": 1,
                "maxLength": 256
            }
        }
    })
}

pub fn workout_schema() -> Value {
    json!({
        "type": "object",
        "required": ["name"],
        "properties": {
            "name": {
                "description": "Name of the workout plan, unique per creator",
                "type": "string",
                "minLength": 1,
                "maxLength": 64
            }
        }
    })
}

pub fn workout_move_schema() -> Value {
    json!({
        "type": "object",
        "required": ["move_name", "move_creator"],
        "properties": {
            "move_name": {
                "description": "Name of the move to include",
                "type": "string",
                "minLength": 1,
                "maxLength": 64
            },
            "move_creator": {
                "description": "Username of the move's creator",
                "type": "string",
                "minLength": 1,
                "maxLength": 64
            },
            "repetitions": {
                "description": "How many repetitions to perform",
                "type": "integer",
                "minimum": 0
            },
            "position": {
                "description": "Zero-based slot in the plan; out-of-range values append",
                "type": "integer"
            }
        }
    })
}
