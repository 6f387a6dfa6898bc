//! Capture fixtures shared by integration tests.
//!
//! A small page load: a document, a stylesheet and a script it pulls in, an
//! XHR fired from the script, a cross-origin image, and a beacon with no
//! timestamp.

use serde_json::{json, Value};

pub fn page_load() -> Value {
    json!({
        "log": {
            "version": "1.2",
            "creator": {"name": "WebInspector", "version": "537.36"},
            "entries": [
                {
                    "startedDateTime": "2024-06-01T09:00:00.000Z",
                    "time": 120.5,
                    "request": {"method": "GET", "url": "https://shop.example.com/", "headers": []},
                    "response": {
                        "status": 200, "statusText": "OK", "headers": [],
                        "content": {"size": 18000, "mimeType": "text/html", "text": "<!doctype html><p>shop</p>"}
                    },
                    "timings": {"blocked": 2, "dns": 15, "connect": 30, "ssl": 20, "send": 0.5, "wait": 50, "receive": 3},
                    "_resourceType": "document",
                    "_priority": "VeryHigh"
                },
                {
                    "startedDateTime": "2024-06-01T09:00:00.130Z",
                    "time": 40,
                    "request": {"method": "GET", "url": "https://shop.example.com/site.css", "headers": []},
                    "response": {
                        "status": 200, "statusText": "OK", "headers": [],
                        "content": {"size": 5000, "mimeType": "text/css"}
                    },
                    "timings": {"blocked": 1, "dns": -1, "connect": -1, "ssl": -1, "send": 0.2, "wait": 30, "receive": 8.8},
                    "_initiator": {"type": "parser", "url": "https://shop.example.com/"}
                },
                {
                    "startedDateTime": "2024-06-01T09:00:00.135Z",
                    "time": 60,
                    "request": {"method": "GET", "url": "https://shop.example.com/app.js", "headers": []},
                    "response": {
                        "status": 200, "statusText": "OK", "headers": [],
                        "content": {"size": 9000, "mimeType": "application/javascript"}
                    },
                    "timings": {"blocked": 1, "dns": -1, "connect": -1, "ssl": -1, "send": 0.2, "wait": 45, "receive": 13.8}
                },
                {
                    "startedDateTime": "2024-06-01T09:00:00.250Z",
                    "time": 80,
                    "request": {"method": "POST", "url": "https://shop.example.com/api/cart", "headers": []},
                    "response": {
                        "status": 201, "statusText": "Created", "headers": [], "bodySize": 14,
                        "content": {"mimeType": "application/json", "encoding": "base64", "text": "eyJpdGVtcyI6W119"}
                    },
                    "timings": {"blocked": 0, "dns": -1, "connect": -1, "ssl": -1, "send": 1, "wait": 70, "receive": 9},
                    "_initiator": {
                        "type": "script",
                        "stack": {"callFrames": [{"functionName": "addToCart", "url": "https://shop.example.com/app.js"}]}
                    }
                },
                {
                    "startedDateTime": "2024-06-01T09:00:00.300Z",
                    "time": 25,
                    "request": {"method": "GET", "url": "https://img.cdn.test/logo.png", "headers": []},
                    "response": {
                        "status": 200, "statusText": "OK", "headers": [],
                        "content": {"size": 8, "mimeType": "image/png", "encoding": "base64", "text": "iVBORw0KGgo="}
                    },
                    "timings": {"blocked": 0, "dns": 5, "connect": 10, "ssl": 5, "send": 0, "wait": 4, "receive": 1}
                },
                {
                    "time": 5,
                    "request": {"method": "GET", "url": "https://shop.example.com/beacon", "headers": []},
                    "response": {"status": 204, "statusText": "No Content", "headers": [], "bodySize": -1, "content": {}}
                }
            ]
        }
    })
}

pub fn page_load_bytes() -> Vec<u8> {
    serde_json::to_vec(&page_load()).unwrap()
}
