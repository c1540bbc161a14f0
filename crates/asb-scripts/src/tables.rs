//! Phoneme to glyph tables, one per script.
//!
//! Keys are the Latin phonemes produced by [`crate::normalize`]; two-letter
//! keys (`sh`, `kh`, ...) win over single letters.

pub type Table = &'static [(&'static str, &'static str)];

/// Inscriptional Pahlavi abjad.
pub const PAHLAVI: Table = &[
    ("a", "\u{10B60}"),
    ("b", "\u{10B61}"),
    ("g", "\u{10B62}"),
    ("d", "\u{10B63}"),
    ("h", "\u{10B64}"),
    ("v", "\u{10B65}"),
    ("w", "\u{10B65}"),
    ("o", "\u{10B65}"),
    ("u", "\u{10B65}"),
    ("r", "\u{10B65}"),
    ("z", "\u{10B66}"),
    ("zh", "\u{10B66}"),
    ("kh", "\u{10B67}"),
    ("x", "\u{10B67}"),
    ("t", "\u{10B72}"),
    ("y", "\u{10B69}"),
    ("i", "\u{10B69}"),
    ("e", "\u{10B69}"),
    ("j", "\u{10B69}"),
    ("k", "\u{10B6A}"),
    ("c", "\u{10B6A}"),
    ("q", "\u{10B6A}"),
    ("gh", "\u{10B62}"),
    ("l", "\u{10B6B}"),
    ("m", "\u{10B6C}"),
    ("n", "\u{10B6D}"),
    ("s", "\u{10B6E}"),
    ("p", "\u{10B6F}"),
    ("f", "\u{10B6F}"),
    ("ch", "\u{10B70}"),
    ("sh", "\u{10B71}"),
];

/// Old Persian cuneiform syllabary (consonants carry the inherent a).
pub const OLD_PERSIAN: Table = &[
    ("a", "\u{103A0}"),
    ("e", "\u{103A0}"),
    ("i", "\u{103A1}"),
    ("u", "\u{103A2}"),
    ("o", "\u{103A2}"),
    ("k", "\u{103A3}"),
    ("c", "\u{103A8}"),
    ("ch", "\u{103A8}"),
    ("g", "\u{103A5}"),
    ("gh", "\u{103A5}"),
    ("kh", "\u{103A7}"),
    ("x", "\u{103A7}"),
    ("j", "\u{103A9}"),
    ("t", "\u{103AB}"),
    ("d", "\u{103AD}"),
    ("p", "\u{103B1}"),
    ("b", "\u{103B2}"),
    ("f", "\u{103B3}"),
    ("n", "\u{103B4}"),
    ("m", "\u{103B6}"),
    ("y", "\u{103B9}"),
    ("v", "\u{103BA}"),
    ("w", "\u{103BA}"),
    ("r", "\u{103BC}"),
    ("l", "\u{103BE}"),
    ("s", "\u{103BF}"),
    ("z", "\u{103C0}"),
    ("zh", "\u{103C0}"),
    ("sh", "\u{103C1}"),
    ("h", "\u{103C3}"),
    ("q", "\u{103A3}"),
];

/// Manichaean abjad.
pub const MANICHAEAN: Table = &[
    ("a", "\u{10AC0}"),
    ("b", "\u{10AC1}"),
    ("g", "\u{10AC3}"),
    ("gh", "\u{10AC4}"),
    ("d", "\u{10AC5}"),
    ("h", "\u{10AC6}"),
    ("v", "\u{10AC7}"),
    ("w", "\u{10AC7}"),
    ("o", "\u{10AC7}"),
    ("u", "\u{10AC7}"),
    ("z", "\u{10AC9}"),
    ("zh", "\u{10ACA}"),
    ("j", "\u{10ACB}"),
    ("kh", "\u{10AD2}"),
    ("x", "\u{10AD1}"),
    ("t", "\u{10AE4}"),
    ("y", "\u{10ACF}"),
    ("i", "\u{10ACF}"),
    ("e", "\u{10ACF}"),
    ("k", "\u{10AD0}"),
    ("l", "\u{10AD3}"),
    ("m", "\u{10AD6}"),
    ("n", "\u{10AD7}"),
    ("s", "\u{10AD8}"),
    ("p", "\u{10ADB}"),
    ("f", "\u{10ADC}"),
    ("ch", "\u{10ADD}"),
    ("c", "\u{10ADD}"),
    ("q", "\u{10ADE}"),
    ("r", "\u{10AE1}"),
    ("sh", "\u{10AE2}"),
];

/// Egyptian uniliteral hieroglyphs.
pub const HIEROGLYPH: Table = &[
    ("a", "\u{1313F}"),
    ("e", "\u{131CB}"),
    ("i", "\u{131CB}"),
    ("y", "\u{131CD}"),
    ("u", "\u{13171}"),
    ("o", "\u{13171}"),
    ("w", "\u{13171}"),
    ("b", "\u{130C0}"),
    ("p", "\u{132AA}"),
    ("f", "\u{13191}"),
    ("v", "\u{13191}"),
    ("m", "\u{13153}"),
    ("n", "\u{13216}"),
    ("r", "\u{1308B}"),
    ("l", "\u{130ED}"),
    ("h", "\u{13254}"),
    ("kh", "\u{1340D}"),
    ("x", "\u{1340D}"),
    ("s", "\u{132F4}"),
    ("sh", "\u{13219}"),
    ("q", "\u{1320E}"),
    ("k", "\u{133A1}"),
    ("c", "\u{133A1}"),
    ("g", "\u{133BC}"),
    ("gh", "\u{133BC}"),
    ("t", "\u{133CF}"),
    ("ch", "\u{1337F}"),
    ("d", "\u{130A7}"),
    ("j", "\u{13193}"),
    ("z", "\u{13283}"),
    ("zh", "\u{13283}"),
];

/// Hebrew square script.
pub const HEBREW: Table = &[
    ("a", "\u{5D0}"),
    ("b", "\u{5D1}"),
    ("g", "\u{5D2}"),
    ("gh", "\u{5D2}"),
    ("d", "\u{5D3}"),
    ("h", "\u{5D4}"),
    ("v", "\u{5D5}"),
    ("w", "\u{5D5}"),
    ("o", "\u{5D5}"),
    ("u", "\u{5D5}"),
    ("z", "\u{5D6}"),
    ("zh", "\u{5D6}"),
    ("kh", "\u{5D7}"),
    ("x", "\u{5D7}"),
    ("t", "\u{5EA}"),
    ("y", "\u{5D9}"),
    ("i", "\u{5D9}"),
    ("e", "\u{5D9}"),
    ("j", "\u{5D2}"),
    ("k", "\u{5DB}"),
    ("l", "\u{5DC}"),
    ("m", "\u{5DE}"),
    ("n", "\u{5E0}"),
    ("s", "\u{5E1}"),
    ("p", "\u{5E4}"),
    ("f", "\u{5E4}"),
    ("ch", "\u{5E6}"),
    ("c", "\u{5E6}"),
    ("q", "\u{5E7}"),
    ("r", "\u{5E8}"),
    ("sh", "\u{5E9}"),
];

/// Linear B syllabary (consonants take their -a syllable).
pub const LINEAR_B: Table = &[
    ("a", "\u{10000}"),
    ("e", "\u{10001}"),
    ("i", "\u{10002}"),
    ("o", "\u{10003}"),
    ("u", "\u{10004}"),
    ("d", "\u{10005}"),
    ("t", "\u{10032}"),
    ("j", "\u{1000A}"),
    ("y", "\u{1000A}"),
    ("k", "\u{1000F}"),
    ("kh", "\u{1000F}"),
    ("x", "\u{1000F}"),
    ("g", "\u{1000F}"),
    ("gh", "\u{1000F}"),
    ("c", "\u{1000F}"),
    ("ch", "\u{1000F}"),
    ("q", "\u{10023}"),
    ("m", "\u{10014}"),
    ("n", "\u{10019}"),
    ("p", "\u{1001E}"),
    ("b", "\u{1001E}"),
    ("f", "\u{1001E}"),
    ("r", "\u{10028}"),
    ("l", "\u{10028}"),
    ("s", "\u{1002D}"),
    ("sh", "\u{1002D}"),
    ("z", "\u{1003C}"),
    ("zh", "\u{1003C}"),
    ("w", "\u{10037}"),
    ("v", "\u{10037}"),
    ("h", "\u{10000}"),
];

/// Devanagari letters without vowel signs.
pub const DEVANAGARI: Table = &[
    ("a", "\u{905}"),
    ("e", "\u{90F}"),
    ("i", "\u{907}"),
    ("o", "\u{913}"),
    ("u", "\u{909}"),
    ("k", "\u{915}"),
    ("kh", "\u{916}"),
    ("x", "\u{916}"),
    ("g", "\u{917}"),
    ("gh", "\u{918}"),
    ("c", "\u{91A}"),
    ("ch", "\u{91A}"),
    ("j", "\u{91C}"),
    ("t", "\u{924}"),
    ("d", "\u{926}"),
    ("n", "\u{928}"),
    ("p", "\u{92A}"),
    ("f", "\u{92B}"),
    ("b", "\u{92C}"),
    ("m", "\u{92E}"),
    ("y", "\u{92F}"),
    ("r", "\u{930}"),
    ("l", "\u{932}"),
    ("v", "\u{935}"),
    ("w", "\u{935}"),
    ("sh", "\u{936}"),
    ("s", "\u{938}"),
    ("h", "\u{939}"),
    ("q", "\u{958}"),
    ("z", "\u{95B}"),
    ("zh", "\u{91D}"),
];

/// Akkadian cuneiform syllabograms.
pub const AKKADIAN: Table = &[
    ("a", "\u{12000}"),
    ("e", "\u{1208A}"),
    ("i", "\u{1213F}"),
    ("o", "\u{1230B}"),
    ("u", "\u{1230B}"),
    ("b", "\u{12040}"),
    ("p", "\u{1227A}"),
    ("f", "\u{1227A}"),
    ("d", "\u{12055}"),
    ("t", "\u{122EB}"),
    ("g", "\u{120B5}"),
    ("gh", "\u{120B5}"),
    ("k", "\u{12157}"),
    ("c", "\u{12157}"),
    ("ch", "\u{12157}"),
    ("q", "\u{122E1}"),
    ("kh", "\u{12129}"),
    ("x", "\u{12129}"),
    ("h", "\u{12129}"),
    ("l", "\u{121B7}"),
    ("m", "\u{12220}"),
    ("n", "\u{1223E}"),
    ("r", "\u{1228F}"),
    ("s", "\u{12293}"),
    ("sh", "\u{122AD}"),
    ("z", "\u{1235D}"),
    ("zh", "\u{1235D}"),
    ("j", "\u{12140}"),
    ("y", "\u{12140}"),
    ("w", "\u{1227F}"),
    ("v", "\u{1227F}"),
];

/// Brahmi letters without vowel signs.
pub const BRAHMI: Table = &[
    ("a", "\u{11005}"),
    ("e", "\u{1100F}"),
    ("i", "\u{11007}"),
    ("o", "\u{11011}"),
    ("u", "\u{11009}"),
    ("k", "\u{11013}"),
    ("kh", "\u{11014}"),
    ("x", "\u{11014}"),
    ("g", "\u{11015}"),
    ("gh", "\u{11016}"),
    ("c", "\u{11018}"),
    ("ch", "\u{11019}"),
    ("j", "\u{1101A}"),
    ("zh", "\u{1101B}"),
    ("t", "\u{11022}"),
    ("d", "\u{11024}"),
    ("n", "\u{11026}"),
    ("p", "\u{11027}"),
    ("f", "\u{11028}"),
    ("b", "\u{11029}"),
    ("m", "\u{1102B}"),
    ("y", "\u{1102C}"),
    ("r", "\u{1102D}"),
    ("l", "\u{1102E}"),
    ("v", "\u{1102F}"),
    ("w", "\u{1102F}"),
    ("sh", "\u{11030}"),
    ("s", "\u{11032}"),
    ("z", "\u{11032}"),
    ("h", "\u{11033}"),
    ("q", "\u{11013}"),
];

/// Avestan alphabet.
pub const AVESTAN: Table = &[
    ("a", "\u{10B00}"),
    ("e", "\u{10B08}"),
    ("i", "\u{10B0C}"),
    ("o", "\u{10B0A}"),
    ("u", "\u{10B0E}"),
    ("k", "\u{10B10}"),
    ("kh", "\u{10B11}"),
    ("x", "\u{10B11}"),
    ("g", "\u{10B14}"),
    ("gh", "\u{10B16}"),
    ("c", "\u{10B17}"),
    ("ch", "\u{10B17}"),
    ("j", "\u{10B18}"),
    ("t", "\u{10B19}"),
    ("d", "\u{10B1B}"),
    ("p", "\u{10B1E}"),
    ("f", "\u{10B1F}"),
    ("b", "\u{10B20}"),
    ("n", "\u{10B25}"),
    ("m", "\u{10B28}"),
    ("y", "\u{10B2B}"),
    ("v", "\u{10B2C}"),
    ("w", "\u{10B2C}"),
    ("r", "\u{10B2D}"),
    ("l", "\u{10B2E}"),
    ("s", "\u{10B2F}"),
    ("z", "\u{10B30}"),
    ("sh", "\u{10B31}"),
    ("zh", "\u{10B32}"),
    ("h", "\u{10B35}"),
    ("q", "\u{10B10}"),
];

/// Pictographic CJK ideographs descended from oracle-bone forms.
pub const ORACLE_BONE: Table = &[
    ("a", "\u{65E5}"),
    ("b", "\u{6708}"),
    ("c", "\u{5C71}"),
    ("d", "\u{6C34}"),
    ("e", "\u{706B}"),
    ("f", "\u{6728}"),
    ("g", "\u{571F}"),
    ("h", "\u{4EBA}"),
    ("i", "\u{53E3}"),
    ("j", "\u{76EE}"),
    ("k", "\u{8033}"),
    ("l", "\u{624B}"),
    ("m", "\u{99AC}"),
    ("n", "\u{725B}"),
    ("o", "\u{7F8A}"),
    ("p", "\u{72AC}"),
    ("q", "\u{9B5A}"),
    ("r", "\u{9CE5}"),
    ("s", "\u{96E8}"),
    ("t", "\u{7530}"),
    ("u", "\u{5973}"),
    ("v", "\u{5B50}"),
    ("w", "\u{5927}"),
    ("x", "\u{5929}"),
    ("y", "\u{9F8D}"),
    ("z", "\u{738B}"),
    ("sh", "\u{79BE}"),
    ("kh", "\u{864E}"),
    ("ch", "\u{8ECA}"),
    ("gh", "\u{8C9D}"),
    ("zh", "\u{9E7F}"),
];
