mod cache;
pub use cache::CheckCache;

mod membership;
pub use membership::MembershipChecker;

mod translation;
pub use translation::{HttpTranslator, Translate, TranslationChecker};

/// The single checking strategy a deployment runs with.
///
/// The two strategies are deliberately never blended. They accept
/// different words and fail in different ways, so mixing their answers
/// would produce a vocabulary nobody chose.
#[derive(Debug, Clone)]
pub enum Checker {
    Membership(MembershipChecker),
    Translation(TranslationChecker<HttpTranslator>),
}

impl Checker {
    pub async fn check(&self, guess: &str) -> bool {
        match self {
            Self::Membership(checker) => checker.check(guess),
            Self::Translation(checker) => checker.check(guess).await,
        }
    }

    pub const fn strategy(&self) -> &'static str {
        match self {
            Self::Membership(_) => "membership",
            Self::Translation(_) => "translation",
        }
    }
}
