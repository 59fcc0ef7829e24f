#[cfg(test)]
mod auth_tests {
    use crate::auth::enums::token_source::{TokenSource, DEFAULT_TOKEN_FILE};
    use crate::auth::structs::auth_token_holder::AuthTokenHolder;
    use std::path::PathBuf;

    #[test]
    fn test_from_config_precedence() {
        assert_eq!(
            TokenSource::from_config("abc", "/etc/token"),
            TokenSource::Static("abc".to_string())
        );
        assert_eq!(
            TokenSource::from_config("", "/etc/token"),
            TokenSource::File { path: PathBuf::from("/etc/token"), explicit: true }
        );
        assert_eq!(
            TokenSource::from_config("", ""),
            TokenSource::File { path: PathBuf::from(DEFAULT_TOKEN_FILE), explicit: false }
        );
    }

    #[test]
    fn test_authorize() {
        let holder = AuthTokenHolder::new(String::new());
        assert!(holder.authorize(None));
        assert!(holder.authorize(Some("anything")));

        holder.replace("s3cret".to_string());
        assert!(holder.authorize(Some("Bearer s3cret")));
        assert!(!holder.authorize(Some("bearer s3cret")));
        assert!(!holder.authorize(Some("Bearer s3cret ")));
        assert!(!holder.authorize(Some("s3cret")));
        assert!(!holder.authorize(None));
    }

    #[tokio::test]
    async fn test_file_token_is_trimmed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("token");
        std::fs::write(&path, "  abc\n").unwrap();
        let source = TokenSource::File { path, explicit: true };
        assert_eq!(source.load().await.unwrap(), "abc");
    }

    #[tokio::test]
    async fn test_reload_rules() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("token");
        std::fs::write(&path, "first").unwrap();
        let source = TokenSource::File { path: path.clone(), explicit: true };

        let holder = AuthTokenHolder::load(&source).await;
        assert_eq!(holder.current().as_str(), "first");
        assert!(!holder.reload(&source).await);

        std::fs::write(&path, "second\n").unwrap();
        assert!(holder.reload(&source).await);
        assert_eq!(holder.current().as_str(), "second");

        std::fs::write(&path, "").unwrap();
        assert!(!holder.reload(&source).await);
        assert_eq!(holder.current().as_str(), "second");

        std::fs::remove_file(&path).unwrap();
        assert!(!holder.reload(&source).await);
        assert_eq!(holder.current().as_str(), "second");
    }

    #[tokio::test]
    async fn test_missing_default_file_disables_auth() {
        let dir = tempfile::tempdir().unwrap();
        let source = TokenSource::File { path: dir.path().join("absent"), explicit: false };
        let holder = AuthTokenHolder::load(&source).await;
        assert!(!holder.is_enabled());
    }

    #[test]
    fn test_debug_output_hides_token() {
        let holder = AuthTokenHolder::new(String::from("s3cret"));
        let rendered = format!("{:?}", holder);
        assert!(!rendered.contains("s3cret"));
        assert!(rendered.contains("enabled: true"));
    }
}
