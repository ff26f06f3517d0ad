//! # services
//!
//! One use case per API operation. Each holds the ports it needs and runs
//! its repository calls as an explicit, ordered sequence; errors from the
//! ports propagate unchanged.

mod add_comment;
mod add_thread;
mod add_user;
mod delete_comment;
mod login_user;
mod logout_user;
mod refresh_authentication;
mod thread_detail;

pub use add_comment::AddCommentUseCase;
pub use add_thread::AddThreadUseCase;
pub use add_user::AddUserUseCase;
pub use delete_comment::DeleteCommentUseCase;
pub use login_user::LoginUserUseCase;
pub use logout_user::LogoutUserUseCase;
pub use refresh_authentication::RefreshAuthenticationUseCase;
pub use thread_detail::ThreadDetailUseCase;
