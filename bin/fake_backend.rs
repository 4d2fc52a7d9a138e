use log::{info, warn};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::convert::Infallible;
use std::env;
use std::sync::Arc;
use tokio::sync::Mutex;
use warp::http::StatusCode;
use warp::Filter;

//  stand-in for the backend so the seeder can be tried locally
const RESOURCES: [&str; 3] = ["cities", "articles", "packages"];

async fn create(
    path: warp::path::FullPath,
    body: Value,
    next_ids: Arc<Mutex<HashMap<String, u64>>>,
) -> Result<impl warp::Reply, Infallible> {
    let resource = path
        .as_str()
        .trim_matches('/')
        .strip_prefix("api/")
        .filter(|r| RESOURCES.iter().any(|known| known == r))
        .map(str::to_string);

    let Some(resource) = resource else {
        warn!("No resource at {}", path.as_str());
        return Ok(warp::reply::with_status(
            warp::reply::json(&json!({ "detail": "Not found." })),
            StatusCode::NOT_FOUND,
        ));
    };
    let Value::Object(mut record) = body else {
        return Ok(warp::reply::with_status(
            warp::reply::json(&json!({ "detail": "Expected a JSON object." })),
            StatusCode::BAD_REQUEST,
        ));
    };

    let mut next_ids = next_ids.lock().await;
    let id = next_ids.entry(resource.clone()).or_insert(0);
    *id += 1;
    record.insert("id".to_string(), json!(*id));
    info!("Created {} #{}", resource, id);

    Ok(warp::reply::with_status(
        warp::reply::json(&Value::Object(record)),
        StatusCode::CREATED,
    ))
}

fn routes() -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    let next_ids = Arc::new(Mutex::new(HashMap::new()));
    warp::post()
        .and(warp::path::full())
        .and(warp::body::json())
        .and(warp::any().map(move || Arc::clone(&next_ids)))
        .and_then(create)
}

#[tokio::main]
async fn main() {
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    info!("Fake backend running on 127.0.0.1:8000");
    warp::serve(routes()).run(([127, 0, 0, 1], 8000)).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn post<F>(routes: &F, path: &str, body: Value) -> (StatusCode, Value)
    where
        F: Filter + 'static,
        F::Extract: warp::Reply + Send,
    {
        let response = warp::test::request()
            .method("POST")
            .path(path)
            .json(&body)
            .reply(routes)
            .await;
        let body = serde_json::from_slice(response.body()).unwrap();
        (response.status(), body)
    }

    #[tokio::test]
    async fn test_ids_count_per_resource() {
        let _ = env_logger::builder().is_test(true).try_init();
        let routes = routes();

        let (status, first) = post(&routes, "/api/cities/", json!({ "name": "Ayodhya" })).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(first["id"], json!(1));

        let (_, second) = post(&routes, "/api/cities/", json!({ "name": "Varanasi" })).await;
        assert_eq!(second["id"], json!(2));

        let article = json!({ "title": "Ganga Aarti" });
        let (status, article) = post(&routes, "/api/articles/", article).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(article["id"], json!(1));
    }

    #[tokio::test]
    async fn test_created_record_echoes_body() {
        let _ = env_logger::builder().is_test(true).try_init();
        let routes = routes();
        let package = json!({
            "name": "Rishikesh Yoga Retreat",
            "duration_days": 7,
            "base_price": 25000,
            "city": 3
        });

        let (status, body) = post(&routes, "/api/packages/", package).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(
            body,
            json!({
                "id": 1,
                "name": "Rishikesh Yoga Retreat",
                "duration_days": 7,
                "base_price": 25000,
                "city": 3
            })
        );
    }

    #[tokio::test]
    async fn test_unknown_resource_and_bad_body() {
        let _ = env_logger::builder().is_test(true).try_init();
        let routes = routes();

        let (status, body) = post(&routes, "/api/hotels/", json!({ "name": "Taj" })).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["detail"], json!("Not found."));

        let (status, _) = post(&routes, "/api/cities/", json!(["Ayodhya"])).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        //  rejected requests do not use up ids
        let (_, city) = post(&routes, "/api/cities/", json!({ "name": "Ayodhya" })).await;
        assert_eq!(city["id"], json!(1));
    }
}
