//! Kanji to hiragana substitutions.
//!
//! Most kanji in the built-in verb list read the same way in every form they
//! appear in and map to a single reading. Kanji shared between verbs with
//! different readings, or whose reading shifts with the inflection like 来る,
//! are keyed together with the kana that follows them. The longest key
//! matching at a position wins.
//!
//! Some spellings stay ambiguous even with the following kana. 降ります reads
//! as 降りる, 入れる as the transitive いれる and 出させる as the causative of 出す.

/// Substitutions keyed on a kanji and the kana following it.
///
/// The substitution includes the reading of the kana it was keyed on.
static CONTEXTUAL: &[(&str, &str)] = &[
    // 来る
    ("来る", "くる"),
    ("来れ", "くれ"),
    ("来ま", "きま"),
    ("来まい", "こまい"),
    ("来な", "こな"),
    ("来なが", "きなが"),
    ("来て", "きて"),
    ("来た", "きた"),
    ("来い", "こい"),
    ("来よ", "こよ"),
    ("来ら", "こら"),
    ("来さ", "こさ"),
    // 出す
    ("出さ", "ださ"),
    ("出し", "だし"),
    ("出す", "だす"),
    ("出せ", "だせ"),
    ("出そ", "だそ"),
    // 入れる
    ("入れ", "いれ"),
    ("入れば", "はいれば"),
    // 着く
    ("着か", "つか"),
    ("着き", "つき"),
    ("着く", "つく"),
    ("着け", "つけ"),
    ("着こ", "つこ"),
    ("着い", "つい"),
    // 消す
    ("消さ", "けさ"),
    ("消し", "けし"),
    ("消す", "けす"),
    ("消せ", "けせ"),
    ("消そ", "けそ"),
    // 降る
    ("降ら", "ふら"),
    ("降る", "ふる"),
    ("降れ", "ふれ"),
    ("降ろ", "ふろ"),
    ("降っ", "ふっ"),
    // 生まれる
    ("生ま", "うま"),
];

/// Find the longest substitution at the start of `text`.
///
/// Returns the reading and the number of bytes it replaces.
pub(super) fn substitute(text: &str) -> Option<(&'static str, usize)> {
    let contextual = CONTEXTUAL
        .iter()
        .filter(|(key, _)| text.starts_with(key))
        .max_by_key(|(key, _)| key.len());

    if let Some(&(key, reading)) = contextual {
        return Some((reading, key.len()));
    }

    let c = text.chars().next()?;
    Some((reading(c)?, c.len_utf8()))
}

/// Get the hiragana substitution of a kanji on its own, if one is known.
fn reading(c: char) -> Option<&'static str> {
    let reading = match c {
        // Numerals.
        '一' => "いち",
        '二' => "に",
        '三' => "さん",
        '四' => "よん",
        '五' => "ご",
        '六' => "ろく",
        '七' => "なな",
        '八' => "はち",
        '九' => "きゅう",
        '十' => "じゅう",
        '百' => "ひゃく",
        '千' => "せん",
        '万' => "まん",
        // Verb stems.
        '会' => "あ",
        '開' => "あ",
        '遊' => "あそ",
        '浴' => "あ",
        '洗' => "あら",
        '有' => "あ",
        '歩' => "ある",
        '言' => "い",
        '行' => "い",
        '要' => "い",
        '居' => "い",
        '入' => "はい",
        '生' => "い",
        '歌' => "うた",
        '売' => "う",
        '起' => "お",
        '送' => "おく",
        '押' => "お",
        '覚' => "おぼ",
        '泳' => "およ",
        '降' => "お",
        '終' => "お",
        '買' => "か",
        '返' => "かえ",
        '帰' => "かえ",
        '書' => "か",
        '貸' => "か",
        '冠' => "かぶ",
        '借' => "か",
        '消' => "き",
        '聞' => "き",
        '切' => "き",
        '着' => "き",
        '来' => "く",
        '答' => "こた",
        '困' => "こま",
        '咲' => "さ",
        '死' => "し",
        '閉' => "し",
        '締' => "し",
        '知' => "し",
        '吸' => "す",
        '住' => "す",
        '座' => "すわ",
        '出' => "で",
        '立' => "た",
        '頼' => "たの",
        '食' => "た",
        '違' => "ちが",
        '使' => "つか",
        '疲' => "つか",
        '作' => "つく",
        '点' => "つ",
        '勤' => "つと",
        '手' => "て",
        '伝' => "つだ",
        '飛' => "と",
        '止' => "と",
        '取' => "と",
        '撮' => "と",
        '直' => "なお",
        '鳴' => "な",
        '習' => "なら",
        '寝' => "ね",
        '登' => "のぼ",
        '飲' => "の",
        '乗' => "の",
        '履' => "は",
        '始' => "はじ",
        '走' => "はし",
        '働' => "はたら",
        '話' => "はな",
        '張' => "は",
        '晴' => "は",
        '引' => "ひ",
        '弾' => "ひ",
        '吹' => "ふ",
        '曲' => "ま",
        '待' => "ま",
        '磨' => "みが",
        '見' => "み",
        '持' => "も",
        '休' => "やす",
        '呼' => "よ",
        '読' => "よ",
        '分' => "わ",
        '忘' => "わす",
        '渡' => "わた",
        '脱' => "ぬ",
        '思' => "おも",
        '考' => "かんが",
        '教' => "おし",
        '学' => "まな",
        _ => return None,
    };

    Some(reading)
}
