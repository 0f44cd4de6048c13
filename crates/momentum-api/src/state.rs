//! Application state shared across all handlers.

use std::sync::Arc;

use sqlx::PgPool;

use momentum_auth::jwt::decoder::JwtDecoder;
use momentum_auth::jwt::encoder::JwtEncoder;
use momentum_auth::password::hasher::PasswordHasher;
use momentum_auth::password::validator::PasswordValidator;
use momentum_core::config::AppConfig;
use momentum_core::error::AppError;

use momentum_database::repositories::deepwork::DeepWorkRepository;
use momentum_database::repositories::memoir::MemoirRepository;
use momentum_database::repositories::notification::NotificationRepository;
use momentum_database::repositories::schedule::ScheduleRepository;
use momentum_database::repositories::summary::SummaryRepository;
use momentum_database::repositories::user::UserRepository;

use momentum_service::auth::service::AuthService;
use momentum_service::deepwork::service::DeepWorkService;
use momentum_service::memoir::service::MemoirService;
use momentum_service::notification::service::NotificationService;
use momentum_service::schedule::service::ScheduleService;
use momentum_service::summary::service::SummaryService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool.
    pub db_pool: PgPool,

    /// JWT token decoder and validator.
    pub jwt_decoder: Arc<JwtDecoder>,

    /// Signup, login, profile.
    pub auth_service: Arc<AuthService>,
    /// Deep work sessions.
    pub deepwork_service: Arc<DeepWorkService>,
    /// Schedules.
    pub schedule_service: Arc<ScheduleService>,
    /// Memoirs.
    pub memoir_service: Arc<MemoirService>,
    /// Notifications.
    pub notification_service: Arc<NotificationService>,
    /// Summaries.
    pub summary_service: Arc<SummaryService>,
}

impl AppState {
    /// Wires repositories, auth components, and services over a pool.
    pub fn build(config: AppConfig, db_pool: PgPool) -> Result<Self, AppError> {
        let user_repo = Arc::new(UserRepository::new(db_pool.clone()));
        let deepwork_repo = Arc::new(DeepWorkRepository::new(db_pool.clone()));
        let schedule_repo = Arc::new(ScheduleRepository::new(db_pool.clone()));
        let memoir_repo = Arc::new(MemoirRepository::new(db_pool.clone()));
        let notification_repo = Arc::new(NotificationRepository::new(db_pool.clone()));
        let summary_repo = Arc::new(SummaryRepository::new(db_pool.clone()));

        let hasher = PasswordHasher::new(&config.auth)?;
        let validator = PasswordValidator::new(&config.auth);
        let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth)?);
        let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));

        let auth_service = Arc::new(AuthService::new(
            Arc::clone(&user_repo),
            hasher,
            validator,
            Arc::clone(&jwt_encoder),
        ));
        let notification_service =
            Arc::new(NotificationService::new(Arc::clone(&notification_repo)));
        let deepwork_service = Arc::new(DeepWorkService::new(
            Arc::clone(&deepwork_repo),
            Arc::clone(&notification_service),
        ));
        let schedule_service = Arc::new(ScheduleService::new(
            Arc::clone(&schedule_repo),
            Arc::clone(&notification_service),
        ));
        let memoir_service = Arc::new(MemoirService::new(Arc::clone(&memoir_repo)));
        let summary_service = Arc::new(SummaryService::new(
            summary_repo,
            deepwork_repo,
            schedule_repo,
            memoir_repo,
        ));

        Ok(Self {
            config: Arc::new(config),
            db_pool,
            jwt_decoder,
            auth_service,
            deepwork_service,
            schedule_service,
            memoir_service,
            notification_service,
            summary_service,
        })
    }
}
