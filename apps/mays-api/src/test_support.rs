//! Seeded in-memory app for handler tests.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};

use mays_core::domain::{Comment, Post, User};
use mays_core::ports::{BaseRepository, TokenService};
use mays_infra::{InMemoryDatabase, JwtConfig, JwtTokenService, Repositories};

use crate::handlers;
use crate::state::AppState;

const TOKEN_SECRET: &str = "handler-test-secret";

pub struct Harness {
    pub state: AppState,
    pub repos: Repositories,
    pub tokens: Arc<dyn TokenService>,
    pub author: User,
    pub other: User,
    pub post: Post,
}

impl Harness {
    pub async fn seeded() -> Self {
        let db = InMemoryDatabase::new();
        let repos = Repositories::in_memory(db.clone());

        let author = repos
            .users
            .insert(User::new("ana", "ana@example.com").with_avatar("/a/ana.png"))
            .await
            .unwrap();
        let other = repos
            .users
            .insert(User::new("bo", "bo@example.com"))
            .await
            .unwrap();
        let post = repos
            .posts
            .insert(Post::new(&other.id, "Episode 4", "Spoilers inside"))
            .await
            .unwrap();

        let tokens: Arc<dyn TokenService> = Arc::new(JwtTokenService::new(JwtConfig {
            secret: TOKEN_SECRET.to_string(),
            ..JwtConfig::default()
        }));

        Self {
            state: AppState::in_memory(db),
            repos,
            tokens,
            author,
            other,
            post,
        }
    }

    pub fn app(
        &self,
    ) -> App<
        impl ServiceFactory<
            ServiceRequest,
            Config = (),
            Response = ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        > + use<>,
    > {
        App::new()
            .app_data(web::Data::new(self.state.clone()))
            .app_data(web::Data::new(self.tokens.clone()))
            .configure(handlers::configure_routes)
    }

    /// `Authorization` header value for a token with the given claims.
    pub fn bearer(&self, user_id: Option<&str>, roles: &[&str]) -> String {
        let roles = roles.iter().map(|r| r.to_string()).collect();
        let token = self
            .tokens
            .generate_token(user_id, "someone", roles)
            .unwrap();
        format!("Bearer {token}")
    }

    /// A token for the author that expired two hours ago.
    pub fn expired_author_bearer(&self) -> String {
        let expired = JwtTokenService::new(JwtConfig {
            secret: TOKEN_SECRET.to_string(),
            expiration_hours: -2,
            ..JwtConfig::default()
        });
        let token = expired
            .generate_token(Some(self.author.id.as_str()), "ana", vec!["user".to_string()])
            .unwrap();
        format!("Bearer {token}")
    }

    pub fn author_bearer(&self) -> String {
        self.bearer(Some(self.author.id.as_str()), &["user"])
    }

    pub fn other_bearer(&self) -> String {
        self.bearer(Some(self.other.id.as_str()), &["premium"])
    }

    pub async fn comment_by_author(&self, content: &str) -> Comment {
        self.repos
            .comments
            .insert(Comment::new(&self.post.id, &self.author.id, content, false))
            .await
            .unwrap()
    }
}
