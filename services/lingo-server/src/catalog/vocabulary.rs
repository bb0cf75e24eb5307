//! Vocabulary words and their derived categories.
//!
//! Categories are not stored with the words. They come from a keyword table
//! consulted in priority order, so a word listed under several categories
//! takes the first one (e.g. "mushroom" is nature before food).

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Serialize;

use super::Level;
use super::Level::{Advanced, Beginner, Intermediate};

/// Thematic grouping of a vocabulary word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Cooking,
    Technology,
    Games,
    Nature,
    Food,
    Objects,
    Places,
    Science,
    Architecture,
    General,
}

impl Category {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Category::Cooking => "cooking",
            Category::Technology => "technology",
            Category::Games => "games",
            Category::Nature => "nature",
            Category::Food => "food",
            Category::Objects => "objects",
            Category::Places => "places",
            Category::Science => "science",
            Category::Architecture => "architecture",
            Category::General => "general",
        }
    }
}

/// Keyword table in priority order. Keywords are lowercase.
const CATEGORY_KEYWORDS: &[(Category, &[&str])] = &[
    (
        Category::Cooking,
        &[
            "bake", "boil", "chef", "fry", "grill", "kitchen", "knife", "oven", "pan", "recipe",
            "spoon", "stove", "whisk",
        ],
    ),
    (
        Category::Technology,
        &[
            "computer", "internet", "keyboard", "laptop", "phone", "robot", "screen", "software",
            "tablet",
        ],
    ),
    (
        Category::Games,
        &[
            "ball", "basketball", "cards", "chess", "dice", "game", "player", "puzzle", "soccer",
            "tennis",
        ],
    ),
    (
        Category::Nature,
        &[
            "bird", "cat", "cloud", "dog", "fish", "flower", "forest", "leaf", "mountain",
            "mushroom", "ocean", "rain", "river", "squirrel", "sun", "tree",
        ],
    ),
    (
        Category::Food,
        &[
            "apple", "banana", "bread", "cake", "cheese", "chocolate", "coffee", "egg", "fish",
            "mushroom", "pizza", "rice", "sandwich", "soup",
        ],
    ),
    (
        Category::Objects,
        &[
            "bag", "book", "bottle", "chair", "clock", "computer", "key", "knife", "lamp", "pen",
            "phone", "table", "umbrella", "window",
        ],
    ),
    (
        Category::Places,
        &[
            "airport", "beach", "city", "hospital", "library", "market", "museum", "park",
            "restaurant", "school",
        ],
    ),
    (
        Category::Science,
        &[
            "atom",
            "energy",
            "experiment",
            "galaxy",
            "gravity",
            "laboratory",
            "microscope",
            "molecule",
            "planet",
            "telescope",
        ],
    ),
    (
        Category::Architecture,
        &[
            "arch",
            "bridge",
            "building",
            "castle",
            "cathedral",
            "column",
            "dome",
            "skyscraper",
            "tower",
            "window",
        ],
    ),
];

/// Word → category, resolved once. Earlier table rows win.
static CATEGORY_INDEX: Lazy<HashMap<&'static str, Category>> = Lazy::new(|| {
    let mut index = HashMap::new();
    for (category, keywords) in CATEGORY_KEYWORDS {
        for keyword in keywords.iter() {
            index.entry(*keyword).or_insert(*category);
        }
    }
    index
});

/// Derive the category of a word. Case-insensitive; unknown words are
/// [`Category::General`].
pub fn category_for(word: &str) -> Category {
    let key = word.trim().to_lowercase();
    CATEGORY_INDEX
        .get(key.as_str())
        .copied()
        .unwrap_or(Category::General)
}

/// A vocabulary word as served to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VocabularyWord {
    pub id: u32,
    pub level: Level,
    pub word: &'static str,
    pub translation: &'static str,
    pub phonetic: &'static str,
    /// Emoji shown next to the word.
    pub image: &'static str,
    pub category: Category,
}

struct Entry {
    id: u32,
    level: Level,
    word: &'static str,
    translation: &'static str,
    phonetic: &'static str,
    image: &'static str,
}

const fn entry(
    id: u32,
    level: Level,
    word: &'static str,
    translation: &'static str,
    phonetic: &'static str,
    image: &'static str,
) -> Entry {
    Entry {
        id,
        level,
        word,
        translation,
        phonetic,
        image,
    }
}

static VOCABULARY: &[Entry] = &[
    entry(1, Beginner, "Cat", "gato", "/kæt/", "🐱"),
    entry(2, Beginner, "Dog", "cachorro", "/dɔːɡ/", "🐶"),
    entry(3, Beginner, "Apple", "maçã", "/ˈæp.əl/", "🍎"),
    entry(4, Beginner, "Book", "livro", "/bʊk/", "📖"),
    entry(5, Beginner, "Pizza", "pizza", "/ˈpiːt.sə/", "🍕"),
    entry(6, Beginner, "Sun", "sol", "/sʌn/", "☀️"),
    entry(7, Beginner, "Chair", "cadeira", "/tʃer/", "🪑"),
    entry(8, Beginner, "Bread", "pão", "/bred/", "🍞"),
    entry(9, Beginner, "Tree", "árvore", "/triː/", "🌳"),
    entry(10, Beginner, "School", "escola", "/skuːl/", "🏫"),
    entry(11, Beginner, "Ball", "bola", "/bɔːl/", "⚽"),
    entry(12, Beginner, "Phone", "telefone", "/foʊn/", "📱"),
    entry(13, Beginner, "Coffee", "café", "/ˈkɔː.fi/", "☕"),
    entry(14, Beginner, "Key", "chave", "/kiː/", "🔑"),
    entry(15, Beginner, "Bird", "pássaro", "/bɝːd/", "🐦"),
    entry(16, Beginner, "Rain", "chuva", "/reɪn/", "🌧️"),
    entry(17, Beginner, "Egg", "ovo", "/eɡ/", "🥚"),
    entry(18, Beginner, "Pen", "caneta", "/pen/", "🖊️"),
    entry(19, Beginner, "Beach", "praia", "/biːtʃ/", "🏖️"),
    entry(20, Beginner, "Cake", "bolo", "/keɪk/", "🎂"),
    entry(21, Intermediate, "Chess", "xadrez", "/tʃes/", "♟️"),
    entry(22, Intermediate, "Kitchen", "cozinha", "/ˈkɪtʃ.ən/", "🍳"),
    entry(23, Intermediate, "Umbrella", "guarda-chuva", "/ʌmˈbrel.ə/", "☂️"),
    entry(24, Intermediate, "Library", "biblioteca", "/ˈlaɪ.brer.i/", "📚"),
    entry(25, Intermediate, "Mountain", "montanha", "/ˈmaʊn.tən/", "⛰️"),
    entry(26, Intermediate, "Sandwich", "sanduíche", "/ˈsæn.wɪtʃ/", "🥪"),
    entry(27, Intermediate, "Keyboard", "teclado", "/ˈkiː.bɔːrd/", "⌨️"),
    entry(28, Intermediate, "Puzzle", "quebra-cabeça", "/ˈpʌz.əl/", "🧩"),
    entry(29, Intermediate, "Museum", "museu", "/mjuːˈziː.əm/", "🏛️"),
    entry(30, Intermediate, "Oven", "forno", "/ˈʌv.ən/", "🔥"),
    entry(31, Intermediate, "Bottle", "garrafa", "/ˈbɑː.t̬əl/", "🍾"),
    entry(32, Intermediate, "Forest", "floresta", "/ˈfɔːr.ɪst/", "🌲"),
    entry(33, Intermediate, "Chocolate", "chocolate", "/ˈtʃɑːk.lət/", "🍫"),
    entry(34, Intermediate, "Tennis", "tênis", "/ˈten.ɪs/", "🎾"),
    entry(35, Intermediate, "Airport", "aeroporto", "/ˈer.pɔːrt/", "✈️"),
    entry(36, Intermediate, "Laptop", "notebook", "/ˈlæp.tɑːp/", "💻"),
    entry(37, Intermediate, "Recipe", "receita", "/ˈres.ə.pi/", "📝"),
    entry(38, Intermediate, "Castle", "castelo", "/ˈkæs.əl/", "🏰"),
    entry(39, Intermediate, "Mushroom", "cogumelo", "/ˈmʌʃ.ruːm/", "🍄"),
    entry(40, Intermediate, "Friendship", "amizade", "/ˈfrend.ʃɪp/", "🤝"),
    entry(41, Advanced, "Gravity", "gravidade", "/ˈɡræv.ə.t̬i/", "🌍"),
    entry(42, Advanced, "Molecule", "molécula", "/ˈmɑː.lə.kjuːl/", "🧬"),
    entry(43, Advanced, "Telescope", "telescópio", "/ˈtel.ə.skoʊp/", "🔭"),
    entry(44, Advanced, "Cathedral", "catedral", "/kəˈθiː.drəl/", "⛪"),
    entry(45, Advanced, "Skyscraper", "arranha-céu", "/ˈskaɪˌskreɪ.pɚ/", "🏙️"),
    entry(46, Advanced, "Laboratory", "laboratório", "/ˈlæb.rə.tɔːr.i/", "🧪"),
    entry(47, Advanced, "Microscope", "microscópio", "/ˈmaɪ.krə.skoʊp/", "🔬"),
    entry(48, Advanced, "Software", "software", "/ˈsɑːft.wer/", "💾"),
    entry(49, Advanced, "Galaxy", "galáxia", "/ˈɡæl.ək.si/", "🌌"),
    entry(50, Advanced, "Whisk", "batedor", "/wɪsk/", "🥣"),
    entry(51, Advanced, "Experiment", "experimento", "/ɪkˈsper.ə.mənt/", "⚗️"),
    entry(52, Advanced, "Bridge", "ponte", "/brɪdʒ/", "🌉"),
    entry(53, Advanced, "Dome", "cúpula", "/doʊm/", "🕌"),
    entry(54, Advanced, "Robot", "robô", "/ˈroʊ.bɑːt/", "🤖"),
    entry(55, Advanced, "Hospital", "hospital", "/ˈhɑː.spɪ.t̬əl/", "🏥"),
    entry(56, Advanced, "Entrepreneur", "empreendedor", "/ˌɑːn.trə.prəˈnɝː/", "💼"),
    entry(57, Advanced, "Thoroughfare", "via pública", "/ˈθɝː.oʊ.fer/", "🛣️"),
    entry(58, Advanced, "Squirrel", "esquilo", "/ˈskwɝː.əl/", "🐿️"),
    entry(59, Advanced, "Anemone", "anêmona", "/əˈnem.ə.ni/", "🌸"),
    entry(60, Advanced, "Rhythm", "ritmo", "/ˈrɪð.əm/", "🥁"),
];

impl Entry {
    fn to_word(&self) -> VocabularyWord {
        VocabularyWord {
            id: self.id,
            level: self.level,
            word: self.word,
            translation: self.translation,
            phonetic: self.phonetic,
            image: self.image,
            category: category_for(self.word),
        }
    }
}

/// All vocabulary words with their derived category, ordered by id.
pub fn vocabulary_words() -> Vec<VocabularyWord> {
    VOCABULARY.iter().map(Entry::to_word).collect()
}

/// Vocabulary words in `category`. `None` or `"all"` returns everything;
/// an unknown category matches nothing.
pub fn words_in_category(category: Option<&str>) -> Vec<VocabularyWord> {
    let wanted = category.map(str::trim).filter(|c| !c.eq_ignore_ascii_case("all"));

    let words = vocabulary_words();
    match wanted {
        None => words,
        Some(name) => words
            .into_iter()
            .filter(|w| w.category.as_str().eq_ignore_ascii_case(name))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_category_for_known_words() {
        assert_eq!(category_for("Pizza"), Category::Food);
        assert_eq!(category_for("Chess"), Category::Games);
        assert_eq!(category_for("  KITCHEN "), Category::Cooking);
        assert_eq!(category_for("Gravity"), Category::Science);
    }

    #[test]
    fn test_unlisted_word_is_general() {
        assert_eq!(category_for("Friendship"), Category::General);
        assert_eq!(category_for(""), Category::General);
    }

    #[test]
    fn test_priority_order_breaks_ties() {
        // Listed under nature and food
        assert_eq!(category_for("mushroom"), Category::Nature);
        // Listed under cooking and objects
        assert_eq!(category_for("knife"), Category::Cooking);
        // Listed under technology and objects
        assert_eq!(category_for("phone"), Category::Technology);
        // Listed under objects and architecture
        assert_eq!(category_for("window"), Category::Objects);
    }

    #[test]
    fn test_category_serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(Category::Architecture).unwrap(),
            "architecture"
        );
        assert_eq!(Category::General.as_str(), "general");
    }

    #[test]
    fn test_vocabulary_ids_unique() {
        let words = vocabulary_words();
        let ids: HashSet<u32> = words.iter().map(|w| w.id).collect();
        assert_eq!(ids.len(), words.len());
    }

    #[test]
    fn test_every_level_has_words() {
        let words = vocabulary_words();
        for level in [Beginner, Intermediate, Advanced] {
            assert!(words.iter().any(|w| w.level == level));
        }
    }

    #[test]
    fn test_filter_by_category() {
        let food = words_in_category(Some("food"));
        assert!(!food.is_empty());
        assert!(food.iter().all(|w| w.category == Category::Food));
        assert!(food.iter().any(|w| w.word == "Pizza"));
    }

    #[test]
    fn test_all_and_none_return_everything() {
        let total = vocabulary_words().len();
        assert_eq!(words_in_category(None).len(), total);
        assert_eq!(words_in_category(Some("all")).len(), total);
        assert_eq!(words_in_category(Some("ALL")).len(), total);
    }

    #[test]
    fn test_unknown_category_is_empty() {
        assert!(words_in_category(Some("sports-cars")).is_empty());
    }

    #[test]
    fn test_word_json_shape() {
        let pizza = vocabulary_words()
            .into_iter()
            .find(|w| w.word == "Pizza")
            .unwrap();
        let json = serde_json::to_value(&pizza).unwrap();
        assert_eq!(json["id"], 5);
        assert_eq!(json["level"], "beginner");
        assert_eq!(json["translation"], "pizza");
        assert_eq!(json["phonetic"], "/ˈpiːt.sə/");
        assert_eq!(json["image"], "🍕");
        assert_eq!(json["category"], "food");
    }
}
