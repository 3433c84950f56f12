use crate::config::AuthConfig;
use crate::error::{AppError, AppResult};
use crate::models::*;
use crate::services::UserService;
use crate::utils::*;

/// Mock authentication. Credentials are never checked against a store:
/// the admin email selects the admin identity, anything else selects the
/// demo player. Tokens are real JWTs so the route guard is real.
#[derive(Clone)]
pub struct AuthService {
    jwt_service: JwtService,
    user_service: UserService,
    auth: AuthConfig,
}

impl AuthService {
    pub fn new(jwt_service: JwtService, user_service: UserService, auth: AuthConfig) -> Self {
        Self {
            jwt_service,
            user_service,
            auth,
        }
    }

    fn is_admin_email(&self, email: &str) -> bool {
        email.trim().eq_ignore_ascii_case(&self.auth.admin_email)
    }

    pub async fn login(&self, request: LoginRequest) -> AppResult<AuthResponse> {
        if request.email.trim().is_empty() || request.password.is_empty() {
            return Err(AppError::ValidationError(
                "Email and password are required".to_string(),
            ));
        }

        let user = if self.is_admin_email(&request.email) {
            self.user_service.admin_user()?
        } else {
            self.user_service.demo_user()?
        };
        self.issue(user).await
    }

    pub async fn register(&self, request: RegisterRequest) -> AppResult<AuthResponse> {
        validate_display_name(&request.name)?;
        validate_email(&request.email)?;
        validate_password(&request.password)?;

        let user = self
            .user_service
            .register_identity(&request.name, &request.email)?;
        self.issue(user).await
    }

    pub async fn admin_login(&self, request: LoginRequest) -> AppResult<AuthResponse> {
        if !self.is_admin_email(&request.email) || request.password != self.auth.admin_password {
            log::warn!("Rejected admin login for {}", request.email.trim());
            return Err(AppError::AuthError(
                "Invalid admin credentials".to_string(),
            ));
        }
        self.issue(self.user_service.admin_user()?).await
    }

    pub async fn refresh_token(&self, request: RefreshTokenRequest) -> AppResult<AuthResponse> {
        let claims = self.jwt_service.verify_refresh_token(&request.refresh_token)?;
        let user = self.user_service.resolve(&claims.to_user());
        self.issue(user).await
    }

    /// Accepts any well-formed address; nothing is sent.
    pub fn forgot_password(&self, request: ForgotPasswordRequest) -> AppResult<()> {
        validate_email(&request.email)?;
        log::info!("Password reset requested for {}", request.email.trim());
        Ok(())
    }

    async fn issue(&self, user: User) -> AppResult<AuthResponse> {
        if !user.is_active() {
            return Err(AppError::Forbidden("Account is suspended".to_string()));
        }

        let access_token = self.jwt_service.generate_access_token(&user)?;
        let refresh_token = self.jwt_service.generate_refresh_token(&user)?;
        log::info!("Issued tokens for user {}", user.id);

        Ok(AuthResponse {
            user: self.user_service.to_response(user).await,
            access_token,
            refresh_token,
            expires_in: self.jwt_service.get_access_token_expires_in(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::game_store::tests::store_with;
    use crate::services::user_service::DEMO_USER_ID;

    fn service() -> AuthService {
        let auth = AuthConfig::default();
        let users = UserService::new(store_with(ScriptedRandom::units(vec![0.0])), &auth);
        AuthService::new(JwtService::new("test-secret", 3600, 7200), users, auth)
    }

    fn login(email: &str, password: &str) -> LoginRequest {
        LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_login_selects_mock_identity() {
        let service = service();

        let player = service.login(login("someone@else.com", "x")).await.unwrap();
        assert_eq!(player.user.id, DEMO_USER_ID);
        assert_eq!(player.user.email, "john@example.com");
        assert_eq!(player.user.balance_cents, 100_000);
        assert_eq!(player.expires_in, 3600);

        let admin = service.login(login("admin@betbliss.com", "x")).await.unwrap();
        assert!(admin.user.is_admin);

        assert!(service.login(login("", "x")).await.is_err());
    }

    #[tokio::test]
    async fn test_admin_login_checks_password() {
        let service = service();
        assert!(
            service
                .admin_login(login("admin@betbliss.com", "admin123"))
                .await
                .is_ok()
        );
        assert!(matches!(
            service.admin_login(login("admin@betbliss.com", "wrong")).await,
            Err(AppError::AuthError(_))
        ));
        assert!(matches!(
            service.admin_login(login("john@example.com", "admin123")).await,
            Err(AppError::AuthError(_))
        ));
    }

    #[tokio::test]
    async fn test_register_validates_input() {
        let service = service();
        let ok = service
            .register(RegisterRequest {
                name: "Jane".to_string(),
                email: "jane@example.com".to_string(),
                password: "secret1".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(ok.user.name, "Jane");
        assert!(!ok.user.is_admin);

        let short = service
            .register(RegisterRequest {
                name: "Jim".to_string(),
                email: "jim@example.com".to_string(),
                password: "12345".to_string(),
            })
            .await;
        assert!(matches!(short, Err(AppError::ValidationError(_))));
    }

    #[tokio::test]
    async fn test_refresh_and_suspension() {
        let service = service();
        let tokens = service.login(login("john@example.com", "x")).await.unwrap();

        let refreshed = service
            .refresh_token(RefreshTokenRequest {
                refresh_token: tokens.refresh_token.clone(),
            })
            .await
            .unwrap();
        assert_eq!(refreshed.user.id, DEMO_USER_ID);

        // An access token is not accepted in place of a refresh token.
        assert!(
            service
                .refresh_token(RefreshTokenRequest {
                    refresh_token: tokens.access_token,
                })
                .await
                .is_err()
        );

        service.user_service.toggle_status(DEMO_USER_ID).unwrap();
        assert!(matches!(
            service.login(login("john@example.com", "x")).await,
            Err(AppError::Forbidden(_))
        ));
    }

    #[test]
    fn test_forgot_password() {
        let service = service();
        let request = |email: &str| ForgotPasswordRequest {
            email: email.to_string(),
        };
        assert!(service.forgot_password(request("john@example.com")).is_ok());
        assert!(service.forgot_password(request("nope")).is_err());
    }
}
