pub trait AvatarResolver: Send + Sync {
    fn avatar_url(&self, display_name: &str) -> String;
}

/// Generated initials avatars, `https://ui-avatars.com/api/?name=Ada+Lovelace`.
#[derive(Debug, Clone)]
pub struct UiAvatars {
    base_url: String,
}

impl UiAvatars {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl AvatarResolver for UiAvatars {
    fn avatar_url(&self, display_name: &str) -> String {
        let name = urlencoding::encode(display_name.trim()).replace("%20", "+");
        format!("{}?name={}", self.base_url, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> UiAvatars {
        UiAvatars::new("https://ui-avatars.com/api/")
    }

    #[test]
    fn test_spaces_become_plus() {
        assert_eq!(
            resolver().avatar_url("Ada Lovelace"),
            "https://ui-avatars.com/api/?name=Ada+Lovelace"
        );
        assert_eq!(
            resolver().avatar_url("Grace Brewster Hopper"),
            "https://ui-avatars.com/api/?name=Grace+Brewster+Hopper"
        );
    }

    #[test]
    fn test_reserved_characters_are_encoded() {
        assert_eq!(
            resolver().avatar_url("A&B=C"),
            "https://ui-avatars.com/api/?name=A%26B%3DC"
        );
    }

    #[test]
    fn test_fallback_name() {
        assert_eq!(resolver().avatar_url("User"), "https://ui-avatars.com/api/?name=User");
    }
}
