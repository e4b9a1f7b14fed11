/// Visibility of a class member or declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProtectionLevel {
    /// No access keyword was written.
    #[default]
    None,
    Public,
    Protected,
    Private,
}

impl ProtectionLevel {
    /// Keyword that spells this level, or `None` when no keyword was written.
    pub fn keyword_id(self) -> Option<KeywordId> {
        match self {
            ProtectionLevel::None => None,
            ProtectionLevel::Public => Some(KeywordId::Public),
            ProtectionLevel::Protected => Some(KeywordId::Protected),
            ProtectionLevel::Private => Some(KeywordId::Private),
        }
    }
}

impl<'a> TokenCursor<'a> {
    /// Consume one of `public` / `protected` / `private` and return its level.
    ///
    /// Returns [`ProtectionLevel::None`] and leaves the cursor alone when none is present.
    pub fn read_access_modifier(&mut self) -> ProtectionLevel {
        if self.is_of_type(TokenKind::Keyword(KeywordId::Public)) {
            ProtectionLevel::Public
        } else if self.is_of_type(TokenKind::Keyword(KeywordId::Protected)) {
            ProtectionLevel::Protected
        } else if self.is_of_type(TokenKind::Keyword(KeywordId::Private)) {
            ProtectionLevel::Private
        } else {
            ProtectionLevel::None
        }
    }
}
