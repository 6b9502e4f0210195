use userdir::db::UserStore;

pub struct TestApp {
    pub address: String,
}

// run the server in another task so the test can drive it over HTTP
pub async fn spawn_app() -> TestApp {
    spawn_app_with_store(UserStore::seeded()).await
}

pub async fn spawn_app_with_store(store: UserStore) -> TestApp {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    let server = userdir::startup::run(listener, store)
        .await
        .expect("Failed to bind address.");
    let _ = tokio::spawn(server);

    TestApp { address }
}
