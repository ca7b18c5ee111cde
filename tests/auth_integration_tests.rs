use actix_web::http::{StatusCode, header};
use actix_web::{App, test, web};
use mydumbbell::data::memory::MemoryStorage;
use mydumbbell::data::store::Store;
use mydumbbell::domain::user::{CreateUser, LoginRequest};
use mydumbbell::presentation::handlers::AppState;
use mydumbbell::presentation::middleware::RequestTracing;
use mydumbbell::presentation::routes::configure;
use std::sync::Arc;

macro_rules! setup_auth_test {
    () => {{
        let store = Store::new(Arc::new(MemoryStorage::new()));
        let state = web::Data::new(AppState::open(store).await.unwrap());

        let app = test::init_service(
            App::new()
                .app_data(state.clone())
                .wrap(RequestTracing)
                .configure(configure),
        )
        .await;

        (app, state)
    }};
}

macro_rules! get_page {
    ($app:expr, $uri:expr) => {{
        let req = test::TestRequest::get().uri($uri).to_request();
        let body = test::call_and_read_body(&$app, req).await;
        String::from_utf8(body.to_vec()).unwrap()
    }};
}

fn location<B>(resp: &actix_web::dev::ServiceResponse<B>) -> &str {
    resp.headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}

fn ana() -> CreateUser {
    CreateUser {
        name: "Ana".to_string(),
        email: "ana@x.com".to_string(),
        password: "senha123".to_string(),
        confirm_password: "senha123".to_string(),
    }
}

#[actix_web::test]
async fn test_health_check_reports_ok() {
    let (app, _state) = setup_auth_test!();

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().contains_key("x-request-id"));
    assert!(resp.headers().contains_key("x-response-time"));

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
}

#[actix_web::test]
async fn test_full_registration_login_flow() {
    let (app, state) = setup_auth_test!();

    let req = test::TestRequest::post()
        .uri("/auth/register")
        .set_form(&ana())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/dashboard");

    let current = state.auth_service.current_user().await.unwrap().unwrap();
    assert_eq!(current.name, "Ana");
    assert_ne!(current.password_hash, "senha123");

    let html = get_page!(app, "/dashboard");
    assert!(html.contains("Olá, Ana! 👋"));
    assert!(html.contains("Conta criada com sucesso!"));
    assert!(html.contains("id=\"main-nav\""));

    // The toast is shown once.
    let html = get_page!(app, "/dashboard");
    assert!(!html.contains("Conta criada com sucesso!"));

    let req = test::TestRequest::post().uri("/auth/logout").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/home");
    assert!(state.auth_service.current_user().await.unwrap().is_none());
    assert!(get_page!(app, "/home").contains("Você foi desconectado."));

    let req = test::TestRequest::post()
        .uri("/auth/login")
        .set_form(&LoginRequest {
            email: "ana@x.com".to_string(),
            password: "senha123".to_string(),
        })
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/dashboard");
    assert!(get_page!(app, "/dashboard").contains("Login realizado com sucesso!"));
}

#[actix_web::test]
async fn test_register_duplicate_email() {
    let (app, state) = setup_auth_test!();

    let req = test::TestRequest::post()
        .uri("/auth/register")
        .set_form(&ana())
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/auth/register")
        .set_form(&CreateUser {
            name: "Outra Ana".to_string(),
            ..ana()
        })
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert!(body.contains("Este email já está cadastrado"));
    // Typed values are kept in the form.
    assert!(body.contains("value=\"Outra Ana\""));

    let current = state.auth_service.current_user().await.unwrap().unwrap();
    assert_eq!(current.name, "Ana");
}

#[actix_web::test]
async fn test_register_rejects_mismatched_passwords() {
    let (app, state) = setup_auth_test!();

    let req = test::TestRequest::post()
        .uri("/auth/register")
        .set_form(&CreateUser {
            confirm_password: "outra".to_string(),
            ..ana()
        })
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert!(body.contains("As senhas não coincidem"));
    assert!(state.auth_service.current_user().await.unwrap().is_none());
}

#[actix_web::test]
async fn test_login_wrong_password() {
    let (app, state) = setup_auth_test!();

    let req = test::TestRequest::post()
        .uri("/auth/register")
        .set_form(&ana())
        .to_request();
    test::call_service(&app, req).await;
    let req = test::TestRequest::post().uri("/auth/logout").to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/auth/login")
        .set_form(&LoginRequest {
            email: "ana@x.com".to_string(),
            password: "errada".to_string(),
        })
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert!(body.contains("Email ou senha incorretos"));
    assert!(state.auth_service.current_user().await.unwrap().is_none());
}

#[actix_web::test]
async fn test_login_with_empty_fields_is_bad_request() {
    let (app, _state) = setup_auth_test!();

    let req = test::TestRequest::post()
        .uri("/auth/login")
        .set_form(&[("email", "")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_protected_pages_redirect_to_login() {
    let (app, _state) = setup_auth_test!();

    for uri in ["/dashboard", "/my-exercises", "/create-workout", "/profile"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER, "{uri}");
        assert_eq!(location(&resp), "/login", "{uri}");
    }

    let html = get_page!(app, "/login");
    assert!(html.contains("Você precisa fazer login para acessar esta página"));
    assert!(html.contains("btn-entrar"));
}

#[actix_web::test]
async fn test_root_and_unknown_pages_redirect() {
    let (app, _state) = setup_auth_test!();

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(location(&resp), "/home");

    let req = test::TestRequest::get().uri("/nowhere").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(location(&resp), "/home");

    let req = test::TestRequest::post()
        .uri("/auth/register")
        .set_form(&ana())
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(location(&resp), "/dashboard");
}

#[actix_web::test]
async fn test_register_mode_shows_confirmation_field() {
    let (app, _state) = setup_auth_test!();

    let login = get_page!(app, "/login");
    assert!(!login.contains("name=\"confirm_password\""));

    let register = get_page!(app, "/login?mode=register");
    assert!(register.contains("name=\"confirm_password\""));
    assert!(register.contains("action=\"/auth/register\""));
}
