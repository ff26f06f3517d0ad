use std::sync::Arc;

use domains::{
    AuthenticationRepository, AuthenticationTokenManager, CommentRepository, PasswordHash, ThreadRepository,
    UserRepository,
};
use services::{
    AddCommentUseCase, AddThreadUseCase, AddUserUseCase, DeleteCommentUseCase, LoginUserUseCase, LogoutUserUseCase,
    RefreshAuthenticationUseCase, ThreadDetailUseCase,
};

/// The adapters a running server is assembled from.
pub struct Ports {
    pub thread_repository: Arc<dyn ThreadRepository>,
    pub comment_repository: Arc<dyn CommentRepository>,
    pub user_repository: Arc<dyn UserRepository>,
    pub authentication_repository: Arc<dyn AuthenticationRepository>,
    pub password_hash: Arc<dyn PasswordHash>,
    pub token_manager: Arc<dyn AuthenticationTokenManager>,
}

/// State shared by every handler. Cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub(crate) use_cases: Arc<UseCases>,
    pub(crate) token_manager: Arc<dyn AuthenticationTokenManager>,
}

pub(crate) struct UseCases {
    pub add_user: AddUserUseCase,
    pub login_user: LoginUserUseCase,
    pub refresh_authentication: RefreshAuthenticationUseCase,
    pub logout_user: LogoutUserUseCase,
    pub add_thread: AddThreadUseCase,
    pub thread_detail: ThreadDetailUseCase,
    pub add_comment: AddCommentUseCase,
    pub delete_comment: DeleteCommentUseCase,
}

impl AppState {
    pub fn new(ports: Ports) -> Self {
        let Ports {
            thread_repository,
            comment_repository,
            user_repository,
            authentication_repository,
            password_hash,
            token_manager,
        } = ports;

        let use_cases = UseCases {
            add_user: AddUserUseCase::new(user_repository.clone(), password_hash.clone()),
            login_user: LoginUserUseCase::new(
                user_repository,
                authentication_repository.clone(),
                token_manager.clone(),
                password_hash,
            ),
            refresh_authentication: RefreshAuthenticationUseCase::new(
                authentication_repository.clone(),
                token_manager.clone(),
            ),
            logout_user: LogoutUserUseCase::new(authentication_repository),
            add_thread: AddThreadUseCase::new(thread_repository.clone()),
            thread_detail: ThreadDetailUseCase::new(thread_repository.clone(), comment_repository.clone()),
            add_comment: AddCommentUseCase::new(comment_repository.clone(), thread_repository),
            delete_comment: DeleteCommentUseCase::new(comment_repository),
        };

        Self {
            use_cases: Arc::new(use_cases),
            token_manager,
        }
    }
}
