use {
  super::*,
  axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{StatusCode, Uri},
    routing::get,
  },
  serde_json::{Value, json},
  std::sync::{Arc, Mutex},
  tokio::net::TcpListener,
};

/// A local stand-in for the posts API.
///
/// Users 1 and 2 exist. User 3 has posts but `/users/3` answers 404. Post 12
/// has no comments. Every request path (with query) is recorded.
pub(crate) struct TestServer {
  pub(crate) base_url: String,
  hits: Arc<Mutex<Vec<String>>>,
}

#[derive(Clone)]
struct Fixture {
  hits: Arc<Mutex<Vec<String>>>,
}

impl Fixture {
  fn record(&self, uri: &Uri) {
    self
      .hits
      .lock()
      .expect("hits lock poisoned")
      .push(uri.to_string());
  }
}

impl TestServer {
  pub(crate) async fn failing() -> Self {
    let hits = Arc::new(Mutex::new(Vec::new()));

    let router = Router::new()
      .fallback(|State(fixture): State<Fixture>, uri: Uri| async move {
        fixture.record(&uri);
        StatusCode::INTERNAL_SERVER_ERROR
      })
      .with_state(Fixture { hits: hits.clone() });

    Self::serve(router, hits).await
  }

  pub(crate) fn hit_count(&self, path: &str) -> usize {
    self
      .hits()
      .iter()
      .filter(|hit| hit.as_str() == path)
      .count()
  }

  pub(crate) fn hits(&self) -> Vec<String> {
    self.hits.lock().expect("hits lock poisoned").clone()
  }

  async fn serve(router: Router, hits: Arc<Mutex<Vec<String>>>) -> Self {
    let listener = TcpListener::bind("127.0.0.1:0")
      .await
      .expect("bind test listener");

    let address = listener.local_addr().expect("listener address");

    tokio::spawn(async move {
      axum::serve(listener, router).await.expect("serve test api");
    });

    Self {
      base_url: format!("http://{address}"),
      hits,
    }
  }

  pub(crate) async fn start() -> Self {
    let hits = Arc::new(Mutex::new(Vec::new()));

    let router = Router::new()
      .route("/users", get(list_users))
      .route("/users/{id}", get(get_user))
      .route("/posts", get(list_posts))
      .route("/comments", get(list_comments))
      .with_state(Fixture { hits: hits.clone() });

    Self::serve(router, hits).await
  }
}

fn comments_for(post_id: u64) -> Value {
  if post_id == 12 {
    return json!([]);
  }

  json!([
    {
      "postId": post_id,
      "id": post_id * 10 + 1,
      "name": format!("first on {post_id}"),
      "email": format!("first{post_id}@example.com"),
      "body": "first body"
    },
    {
      "postId": post_id,
      "id": post_id * 10 + 2,
      "name": format!("second on {post_id}"),
      "email": format!("second{post_id}@example.com"),
      "body": "second body"
    }
  ])
}

async fn get_user(
  State(fixture): State<Fixture>,
  uri: Uri,
  Path(id): Path<u64>,
) -> Result<Json<Value>, StatusCode> {
  fixture.record(&uri);

  users()
    .as_array()
    .and_then(|users| users.iter().find(|user| user["id"] == json!(id)))
    .cloned()
    .map(Json)
    .ok_or(StatusCode::NOT_FOUND)
}

async fn list_comments(
  State(fixture): State<Fixture>,
  uri: Uri,
  Query(query): Query<HashMap<String, String>>,
) -> Json<Value> {
  fixture.record(&uri);

  let post_id = query
    .get("postId")
    .and_then(|id| id.parse::<u64>().ok())
    .unwrap_or_default();

  Json(comments_for(post_id))
}

async fn list_posts(
  State(fixture): State<Fixture>,
  uri: Uri,
  Query(query): Query<HashMap<String, String>>,
) -> Json<Value> {
  fixture.record(&uri);

  let user_id = query
    .get("userId")
    .and_then(|id| id.parse::<u64>().ok())
    .unwrap_or_default();

  Json(posts_for(user_id))
}

async fn list_users(State(fixture): State<Fixture>, uri: Uri) -> Json<Value> {
  fixture.record(&uri);
  Json(users())
}

fn post(user_id: u64, id: u64, title: &str) -> Value {
  json!({
    "userId": user_id,
    "id": id,
    "title": title,
    "body": format!("body of {id}")
  })
}

fn posts_for(user_id: u64) -> Value {
  match user_id {
    1 => json!([post(1, 1, "sunt aut facere"), post(1, 2, "qui est esse")]),
    2 => json!([
      post(2, 11, "et ea vero quia laudantium"),
      post(2, 12, "in quibusdam tempore"),
      post(2, 13, "dolorum ut in voluptas"),
    ]),
    3 => json!([post(3, 21, "asperiores ea ipsam")]),
    _ => json!([]),
  }
}

fn users() -> Value {
  json!([
    {
      "id": 1,
      "name": "Leanne Graham",
      "username": "Bret",
      "company": {
        "name": "Romaguera-Crona",
        "catchPhrase": "Multi-layered client-server neural-net",
        "bs": "harness real-time e-markets"
      }
    },
    {
      "id": 2,
      "name": "Ervin Howell",
      "username": "Antonette",
      "company": {
        "name": "Deckow-Crist",
        "catchPhrase": "Proactive didactic contingency",
        "bs": "synergize scalable supply-chains"
      }
    }
  ])
}
