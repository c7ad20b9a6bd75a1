//! Platform payload fixtures modeled on real API responses.

use httpmock::Mock;
use httpmock::prelude::*;
use serde_json::{Value, json};

/// Session href returned by the mock login endpoint.
pub const SESSION_HREF: &str = "/api/v1/session/df1bfacb-0000-0000-0000-c8f57d8f3c71";

/// Mount a login mock returning [`SESSION_HREF`] in the `location` header.
pub fn mock_login(server: &MockServer) -> Mock<'_> {
    server.mock(|when, then| {
        when.method(POST).path("/api/v1/login");
        then.status(200).header("location", SESSION_HREF);
    })
}

/// A single catalog entry document with the given path id.
#[must_use]
pub fn catalog_entry_json(id: &str) -> Value {
    json!({
        "_links": {
            "self": {"href": id},
            "feed": [
                {
                    "href": "https://s3.amazonaws.com/bluedata-catalog/bundles/catalog/external/docker/EPIC-5.0/feeds/feed.json",
                    "name": "BlueData EPIC-5.0 catalog feed for docker"
                }
            ]
        },
        "id": id,
        "distro_id": "bluedata/spark240juphub7xssl",
        "label": {
            "name": "Spark240",
            "description": "Spark240 multirole with Jupyter Notebook, Jupyterhub with SSL and gateway node"
        },
        "version": "2.8",
        "timestamp": 0,
        "isdebug": false,
        "osclass": ["centos"],
        "logo": {
            "checksum": "1471eb59356066ed4a06130566764ea6",
            "url": "http://10.1.0.53/catalog/logos/bluedata-spark240juphub7xssl-2.8"
        },
        "documentation": {
            "checksum": "52f53f1b2845463b9e370d17fb80bea6",
            "mimetype": "text/markdown",
            "file": "/opt/bluedata/catalog/documentation/bluedata-spark240juphub7xssl-2.8"
        },
        "state": "initialized",
        "state_info": ""
    })
}

/// A catalog list payload with one embedded entry (`/api/v1/catalog/29`).
#[must_use]
pub fn catalog_list_json() -> Value {
    let mut entry = catalog_entry_json("/api/v1/catalog/29");
    if let Some(object) = entry.as_object_mut() {
        object.remove("id");
    }
    json!({
        "_links": {
            "self": {"href": "/api/v1/catalog/"},
            "feedlog": {"href": "/api/v1/catalog/feedlog"}
        },
        "catalog_api_version": 6,
        "feeds_refresh_period_seconds": 86400,
        "feeds_read_counter": 5,
        "catalog_write_counter": 5,
        "_embedded": {"independent_catalog_entries": [entry]}
    })
}

/// A single user document with the given path id.
#[must_use]
pub fn user_json(id: &str, name: &str) -> Value {
    json!({
        "_links": {"self": {"href": id}},
        "label": {"name": name, "description": "test user"},
        "is_group_added_user": false,
        "is_external": false,
        "is_service_account": false,
        "default_tenant": "",
        "is_siteadmin": false
    })
}

/// A user list payload with two embedded users.
#[must_use]
pub fn user_list_json() -> Value {
    json!({
        "_embedded": {
            "users": [
                user_json("/api/v1/user/16", "csnow"),
                {
                    "_links": {"self": {"href": "/api/v1/user/5"}},
                    "label": {"name": "admin", "description": "BlueData Administrator"},
                    "is_group_added_user": false,
                    "is_external": false,
                    "is_service_account": false,
                    "default_tenant": "/api/v1/tenant/1",
                    "is_siteadmin": true
                }
            ]
        }
    })
}

/// A single role document.
#[must_use]
pub fn role_json() -> Value {
    json!({
        "_links": {
            "self": {"href": "/api/v1/role/1"},
            "all_roles": {"href": "/api/v1/role"}
        },
        "label": {"name": "Site Admin", "description": "Role for Site Admin"}
    })
}

/// A lock status document with the given internal and external lock hrefs.
#[must_use]
pub fn lock_status_json(internal: &[&str], external: &[&str]) -> Value {
    let internal_locks: Vec<Value> = internal
        .iter()
        .map(|href| json!({"_links": {"self": {"href": href}}, "reason": "upgrade", "internal": true}))
        .collect();
    let external_locks: Vec<Value> = external
        .iter()
        .map(|href| json!({"_links": {"self": {"href": href}}, "reason": "install", "internal": false, "source": "admin"}))
        .collect();
    json!({
        "_links": {"self": {"href": "/api/v1/lock"}},
        "locked": !(internal.is_empty() && external.is_empty()),
        "quiesced": internal.is_empty(),
        "_embedded": {
            "internal_locks": internal_locks,
            "external_locks": external_locks
        }
    })
}
