//! Ancient script transliterators and the timeline banner.
//!
//! Every script is a table from Latin phonemes to glyphs. Persian input is
//! first normalized to the same phonemes, so both alphabets work.

use std::sync::Arc;

use asb_core::{
    errors::Error,
    transform::{Transform, TransformDispatcher},
    Result,
};

pub mod tables;
mod timeline;

pub use timeline::Timeline;

use tables::Table;

/// Labels and tables in the order replies list them.
pub const SCRIPTS: [(&str, &str, Table); 11] = [
    ("📜 پهلوی", "pahlavi", tables::PAHLAVI),
    ("🔶 میخی", "cuneiform", tables::OLD_PERSIAN),
    ("☀️ مانوی", "manichaean", tables::MANICHAEAN),
    ("𓃭 هیروگلیف", "hieroglyph", tables::HIEROGLYPH),
    ("✡️ عبری", "hebrew", tables::HEBREW),
    ("🅱️ خط B", "linear_b", tables::LINEAR_B),
    ("🕉 سانسکریت", "sanskrit", tables::DEVANAGARI),
    ("⚔️ اکدی", "akkadian", tables::AKKADIAN),
    ("🦴 اوراکل", "oracle_bone", tables::ORACLE_BONE),
    ("براهمی", "brahmi", tables::BRAHMI),
    ("اوستایی", "avestan", tables::AVESTAN),
];

/// Builds the dispatcher over all eleven scripts.
pub fn dispatcher() -> TransformDispatcher {
    SCRIPTS
        .iter()
        .fold(TransformDispatcher::new(), |d, &(label, name, table)| {
            d.with(label, Arc::new(Transliterator::new(name, table)))
        })
}

#[derive(Clone, Copy, Debug)]
pub struct Transliterator {
    script: &'static str,
    table: Table,
}

impl Transliterator {
    pub const fn new(script: &'static str, table: Table) -> Self {
        Self { script, table }
    }

    /// Fails when `text` contains nothing this script can write.
    pub fn transliterate(&self, text: &str) -> Result<String> {
        let phonemes = normalize(text);
        let mut out = String::with_capacity(phonemes.len() * 4);
        let mut glyphs = 0usize;
        let mut rest = phonemes.as_str();

        while let Some(c) = rest.chars().next() {
            if let Some((key, glyph)) = self.lookup(rest) {
                out.push_str(glyph);
                glyphs += 1;
                rest = &rest[key.len()..];
                continue;
            }
            if c.is_whitespace() || c.is_ascii_punctuation() || c.is_ascii_digit() {
                out.push(c);
            }
            rest = &rest[c.len_utf8()..];
        }

        if glyphs == 0 {
            return Err(Error::Transform {
                script: self.script.to_string(),
                reason: "no transliterable letters".to_string(),
            });
        }
        Ok(out)
    }

    fn lookup(&self, s: &str) -> Option<(&'static str, &'static str)> {
        let longest = |len: usize| {
            self.table
                .iter()
                .find(|(key, _)| key.len() == len && s.starts_with(key))
                .copied()
        };
        longest(2).or_else(|| longest(1))
    }
}

impl Transform for Transliterator {
    fn transform(&self, text: &str) -> Result<String> {
        self.transliterate(text)
    }
}

/// Lowercases Latin letters and rewrites Persian letters, digits and
/// punctuation into their Latin phonetic counterparts.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match persian_phoneme(c) {
            Some(p) => out.push_str(p),
            None => out.extend(c.to_lowercase()),
        }
    }
    out
}

fn persian_phoneme(c: char) -> Option<&'static str> {
    let p = match c {
        'ا' | 'آ' | 'أ' | 'إ' | 'ع' => "a",
        'ب' => "b",
        'پ' => "p",
        'ت' | 'ط' => "t",
        'ث' | 'س' | 'ص' => "s",
        'ج' => "j",
        'چ' => "ch",
        'ح' | 'ه' | 'ة' => "h",
        'خ' => "kh",
        'د' => "d",
        'ذ' | 'ز' | 'ض' | 'ظ' => "z",
        'ر' => "r",
        'ژ' => "zh",
        'ش' => "sh",
        'غ' => "gh",
        'ف' => "f",
        'ق' => "q",
        'ک' | 'ك' => "k",
        'گ' => "g",
        'ل' => "l",
        'م' => "m",
        'ن' => "n",
        'و' | 'ؤ' => "v",
        'ی' | 'ي' | 'ئ' | 'ى' => "y",
        'ء' => "",
        '،' => ",",
        '؟' => "?",
        '؛' => ";",
        '۰'..='۹' => return Some(ASCII_DIGITS[(c as usize) - ('۰' as usize)]),
        _ => return None,
    };
    Some(p)
}

const ASCII_DIGITS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];
