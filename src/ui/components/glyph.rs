/// 카드에 쓰이는 아이콘 문자
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Sparkles,
    Star,
    Heart,
    Moon,
    BookOpen,
    HandHeart,
}

impl Glyph {
    pub fn symbol(self) -> &'static str {
        match self {
            Glyph::Sparkles => "✦",
            Glyph::Star => "★",
            Glyph::Heart => "♥",
            Glyph::Moon => "☾",
            Glyph::BookOpen => "❐",
            Glyph::HandHeart => "❦",
        }
    }

    /// 등장 초기(작게 보일 때)의 문자
    pub fn seed_symbol(self) -> &'static str {
        match self {
            Glyph::Star | Glyph::Sparkles => "✧",
            Glyph::Moon => "☽",
            _ => "·",
        }
    }
}
