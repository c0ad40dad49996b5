//! The built-in verb list, and helpers to look verbs up.

use crate::inflection::{FormKey, Formality, Polarity, Tense};
use crate::kana;
use crate::verb::{Class, RecordClass, Verb};

/// Setup a list of regular verbs.
macro_rules! regular {
    ($($class:ident $dictionary:literal $kana:literal $meaning:literal),* $(,)?) => {
        &[$((Class::$class, $dictionary, $kana, $meaning),)*]
    };
}

/// Regular verbs in the built-in list, as `(class, dictionary, kana,
/// meaning)`. Godan rows are classified from the dictionary form.
static REGULAR: &[(Class, &str, &str, &str)] = regular! {
    Godan "会う" "あう" "to meet",
    Godan "開く" "あく" "to open",
    Ichidan "開ける" "あける" "to open",
    Ichidan "あげる" "あげる" "to give",
    Godan "遊ぶ" "あそぶ" "to play",
    Ichidan "浴びる" "あびる" "to take a shower",
    Godan "洗う" "あらう" "to wash",
    Godan "歩く" "あるく" "to walk",
    Godan "言う" "いう" "to say, to tell",
    Godan "行く" "いく" "to go",
    Godan "要る" "いる" "to need, must have, be required",
    Ichidan "居る" "いる" "to be, to exist (animate objects)",
    Ichidan "入れる" "いれる" "to insert, to put in",
    Godan "歌う" "うたう" "to sing",
    Ichidan "生まれる" "うまれる" "to be born",
    Godan "売る" "うる" "to sell",
    Ichidan "起きる" "おきる" "to get up, to stand up",
    Godan "おく" "おく" "to put",
    Godan "送る" "おくる" "to send",
    Godan "押す" "おす" "to push",
    Ichidan "覚える" "おぼえる" "to memorize, to remember",
    Godan "泳ぐ" "およぐ" "to swim",
    Ichidan "降りる" "おりる" "to get off",
    Godan "終わる" "おわる" "to end",
    Godan "買う" "かう" "to buy",
    Godan "返す" "かえす" "to return an object",
    Godan "帰る" "かえる" "to return home",
    Godan "かかる" "かかる" "to take time or money",
    Godan "書く" "かく" "to write",
    Ichidan "かける" "かける" "to put on (glasses), to make a phone call",
    Godan "貸す" "かす" "to lend",
    Godan "冠る" "かぶる" "to put on a hat",
    Ichidan "借りる" "かりる" "to borrow",
    Ichidan "消える" "きえる" "to go out, to vanish",
    Godan "聞く" "きく" "to listen, to ask",
    Godan "切る" "きる" "to cut",
    Ichidan "着る" "きる" "to wear, to put on",
    Godan "消す" "けす" "to turn off, to switch off",
    Ichidan "答える" "こたえる" "to answer",
    Godan "困る" "こまる" "to be in trouble",
    Godan "咲く" "さく" "to blossom",
    Godan "さす" "さす" "to open an umbrella",
    Godan "死ぬ" "しぬ" "to die, to pass away",
    Godan "閉まる" "しまる" "to close",
    Ichidan "閉める" "しめる" "to close",
    Ichidan "締める" "しめる" "to fasten a belt",
    Godan "知る" "しる" "to know",
    Godan "吸う" "すう" "to breathe, to smoke",
    Godan "住む" "すむ" "to live, to reside",
    Godan "座る" "すわる" "to sit",
    Godan "出す" "だす" "to take out, to hand in",
    Godan "立つ" "たつ" "to stand",
    Godan "頼む" "たのむ" "to ask, to request",
    Ichidan "食べる" "たべる" "to eat",
    Godan "違う" "ちがう" "to be different",
    Godan "使う" "つかう" "to use",
    Ichidan "疲れる" "つかれる" "to get tired",
    Godan "着く" "つく" "to arrive",
    Godan "作る" "つくる" "to make, to produce",
    Ichidan "点ける" "つける" "to turn on",
    Ichidan "勤める" "つとめる" "to work for someone",
    Godan "手伝う" "てつだう" "to help",
    Ichidan "出かける" "でかける" "to go out",
    Ichidan "できる" "できる" "to be able to",
    Ichidan "出る" "でる" "to leave, to go out",
    Godan "飛ぶ" "とぶ" "to fly",
    Godan "止まる" "とまる" "to stop",
    Godan "取る" "とる" "to take",
    Godan "撮る" "とる" "to take (a photo)",
    Godan "直す" "なおす" "to repair, to fix",
    Godan "鳴く" "なく" "to cry, to sing (birds)",
    Godan "鳴る" "なる" "to sound, to ring",
    Godan "習う" "ならう" "to learn",
    Godan "脱ぐ" "ぬぐ" "to take off clothes",
    Ichidan "寝る" "ねる" "to sleep",
    Godan "登る" "のぼる" "to climb up",
    Godan "飲む" "のむ" "to drink",
    Godan "乗る" "のる" "to take, to ride",
    Godan "入る" "はいる" "to enter",
    Godan "履く" "はく" "to put on shoes",
    Godan "始まる" "はじまる" "to begin, to start",
    Godan "走る" "はしる" "to run",
    Godan "働く" "はたらく" "to work",
    Godan "話す" "はなす" "to talk, to speak, to tell",
    Godan "張る" "はる" "to put something on, to stick",
    Ichidan "晴れる" "はれる" "to clear up",
    Godan "引く" "ひく" "to pull",
    Godan "弾く" "ひく" "to play an instrument",
    Godan "吹く" "ふく" "to blow (wind)",
    Godan "降る" "ふる" "to fall (rain, snow)",
    Godan "曲がる" "まがる" "to turn",
    Godan "待つ" "まつ" "to wait",
    Godan "磨く" "みがく" "to polish, to brush",
    Ichidan "見せる" "みせる" "to show",
    Ichidan "見る" "みる" "to see, to watch",
    Godan "持つ" "もつ" "to have, to own",
    Godan "休む" "やすむ" "to rest",
    Godan "やる" "やる" "to do",
    Godan "呼ぶ" "よぶ" "to call",
    Godan "読む" "よむ" "to read",
    Godan "分かる" "わかる" "to know, to understand",
    Ichidan "忘れる" "わすれる" "to forget",
    Godan "渡す" "わたす" "to hand over",
    Godan "渡る" "わたる" "to cross",
};

/// Present and past forms of an irregular verb, in the order plain, polite,
/// negative plain and negative polite.
fn present_and_past(present: [&str; 4], past: [&str; 4]) -> Vec<(FormKey, String)> {
    let mut overrides = Vec::with_capacity(8);

    for (tense, cells) in [(Tense::Present, present), (Tense::Past, past)] {
        let keys = Polarity::ALL
            .into_iter()
            .flat_map(|p| Formality::ALL.into_iter().map(move |f| FormKey::new(tense, p, f)));

        for (key, form) in keys.zip(cells) {
            overrides.push((key, form.to_owned()));
        }
    }

    overrides
}

/// Construct the built-in verb list, ordered by kana.
pub fn builtin() -> Vec<Verb> {
    let mut verbs = Vec::with_capacity(REGULAR.len() + 3);

    for &(class, dictionary, kana, meaning) in REGULAR {
        verbs.push(match class {
            Class::Ichidan => Verb::ichidan(dictionary, kana, meaning),
            Class::Godan => Verb::godan(dictionary, kana, meaning),
        });
    }

    verbs.push(Verb::irregular(
        "有る",
        "ある",
        "to be, to exist (inanimate objects)",
        Class::Godan,
        [(FormKey::new(Tense::Present, Polarity::Negative, Formality::Plain), "ない")],
    ));

    verbs.push(Verb::irregular(
        "来る",
        "くる",
        "to come",
        Class::Godan,
        present_and_past(
            ["来る", "来ます", "来ない", "来ません"],
            ["来た", "来ました", "来なかった", "来ませんでした"],
        ),
    ));

    verbs.push(Verb::irregular(
        "する",
        "する",
        "to do",
        Class::Godan,
        present_and_past(
            ["する", "します", "しない", "しません"],
            ["した", "しました", "しなかった", "しませんでした"],
        ),
    ));

    verbs.sort_by(|a, b| a.kana().cmp(b.kana()));
    verbs
}

/// Find a verb by its exact dictionary form or kana reading.
///
/// Dictionary forms take precedence, since several verbs can share a
/// reading.
pub fn lookup<'a>(verbs: &'a [Verb], query: &str) -> Option<&'a Verb> {
    let query = query.trim();

    verbs
        .iter()
        .find(|verb| verb.dictionary() == query)
        .or_else(|| verbs.iter().find(|verb| verb.kana() == query))
}

/// Search verbs by substring over the dictionary form, the kana reading and
/// the meaning, optionally restricted to one class.
///
/// Katakana in the query matches hiragana readings, and the meaning is
/// matched case-insensitively. An empty query matches every verb.
pub fn search<'a>(
    verbs: &'a [Verb],
    query: &str,
    class: Option<RecordClass>,
) -> impl Iterator<Item = &'a Verb> + 'a {
    let query = query.trim().to_owned();

    let reading = query
        .chars()
        .map(|c| kana::katakana_to_hiragana(c).unwrap_or(c))
        .collect::<String>();

    let meaning = query.to_lowercase();

    verbs.iter().filter(move |verb| {
        if let Some(class) = class {
            if verb.record_class() != class {
                return false;
            }
        }

        verb.dictionary().contains(&reading)
            || verb.dictionary().contains(query.as_str())
            || verb.kana().contains(&reading)
            || verb.meaning().to_lowercase().contains(&meaning)
    })
}
