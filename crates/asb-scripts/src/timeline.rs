/// Rough historical span of each script, oldest first.
const ERAS: [(&str, &str); 11] = [
    ("𓃭 هیروگلیف مصری", "۳۲۰۰ پ.م تا ۴۰۰ م"),
    ("⚔️ میخی اکدی", "۲۵۰۰ پ.م تا ۱۰۰ م"),
    ("🅱️ خط B", "۱۴۵۰ تا ۱۲۰۰ پ.م"),
    ("🦴 اوراکل", "۱۲۵۰ تا ۱۰۵۰ پ.م"),
    ("🔶 میخی پارسی باستان", "۵۲۵ تا ۳۳۰ پ.م"),
    ("براهمی", "سده ۳ پ.م تا سده ۵ م"),
    ("📜 پهلوی", "سده ۳ پ.م تا سده ۱۰ م"),
    ("✡️ عبری مربع", "سده ۳ پ.م تا امروز"),
    ("☀️ مانوی", "سده ۳ تا سده ۱۰ م"),
    ("اوستایی", "سده ۵ تا سده ۱۳ م"),
    ("🕉 دیوناگری (سانسکریت)", "سده ۱۰ م تا امروز"),
];

/// Banner shown on `/start`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Timeline;

impl Timeline {
    pub fn as_text(&self) -> String {
        ERAS.iter()
            .map(|(script, era)| format!("▫️ {script}: {era}\n"))
            .collect()
    }
}
