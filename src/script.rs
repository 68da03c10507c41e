use serde::Serialize;

/// Which rule set a paragraph is checked against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Script {
    Persian,
    Default,
}

impl Script {
    /// A single Persian character anywhere makes the whole text Persian.
    pub fn of(text: &str) -> Script {
        if contains_persian(text) {
            Script::Persian
        } else {
            Script::Default
        }
    }
}

pub fn contains_persian(text: &str) -> bool {
    text.chars().any(is_persian_char)
}

fn is_persian_char(c: char) -> bool {
    matches!(
        c,
        // Persian alphabet
        '丕' | '亘' | '倬' | '鬲' | '孬' | '噩' | '趩' | '丨' | '禺' | '丿' | '匕' | '乇' | '夭' | '跇' | '爻' | '卮'
            | '氐' | '囟' | '胤' | '馗' | '毓' | '睾' | '賮' | '賯' | '讴' | '诏' | '賱' | '賲' | '賳' | '賵'
            | '賴' | '蹖'
            // Arabic letter forms common in Persian text
            | '賷' | '賰' | '丞' | '亍' | '兀' | '廿' | '丌' | '丐' | '卅'
            // Presentation forms: peh, tcheh, jeh, keheh, gaf, farsi yeh
            | '\u{FB56}'..='\u{FB59}'
            | '\u{FB7A}'..='\u{FB7D}'
            | '\u{FB8A}'..='\u{FB8B}'
            | '\u{FB8E}'..='\u{FB95}'
            | '\u{FBFC}'..='\u{FBFF}'
            // Presentation forms B: hamza through yeh, lam-alef ligatures
            | '\u{FE80}'..='\u{FEFC}'
    )
}
