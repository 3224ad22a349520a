//! Response shapes for the structured (JSON) endpoints.
//!
//! Field names follow the wire format, including its quirks; where the
//! upstream spelling is unusable in Rust it is renamed through serde.

use serde::{Deserialize, Serialize};

/// Random image and fact for one of the `animal/*` endpoints.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AnimalFact {
    pub image: String,
    pub fact: String,
}

/// A single gif link from the `animu/*` endpoints.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AnimuLink {
    pub link: String,
}

/// Quote from `animu/quote`. The upstream API misspells the character
/// field; the rename keeps the wire format intact.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AnimeQuote {
    pub sentence: String,
    #[serde(rename = "characther")]
    pub character: String,
    pub anime: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Lyrics {
    pub title: String,
    pub author: String,
    pub lyrics: String,
    pub thumbnail: LyricsLinks,
    pub links: LyricsLinks,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LyricsLinks {
    pub genius: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Joke {
    pub joke: String,
}

/// Pokedex entry. Numeric-looking fields arrive as strings on the wire.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Pokemon {
    pub name: String,
    pub id: String,
    #[serde(rename = "type")]
    pub types: Vec<String>,
    pub species: Vec<String>,
    pub abilities: Vec<String>,
    pub height: String,
    pub weight: String,
    pub base_experience: String,
    pub gender: Vec<String>,
    pub egg_groups: Vec<String>,
    pub stats: PokemonStats,
    pub family: PokemonFamily,
    pub sprites: PokemonSprites,
    pub description: String,
    pub generation: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PokemonStats {
    pub hp: String,
    pub attack: String,
    pub defense: String,
    pub sp_atk: String,
    pub sp_def: String,
    pub speed: String,
    pub total: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PokemonFamily {
    #[serde(rename = "evolutionStage")]
    pub evolution_stage: u32,
    #[serde(rename = "evolutionLine")]
    pub evolution_line: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PokemonSprites {
    pub normal: String,
    pub animated: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MinecraftProfile {
    pub username: String,
    pub uuid: String,
    pub name_history: Vec<NameChange>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct NameChange {
    pub name: String,
    #[serde(rename = "changedToAt")]
    pub changed_to_at: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Meme {
    pub id: u64,
    pub image: String,
    pub caption: String,
    pub category: String,
}

/// Fake Discord bot token from `bottoken`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BotToken {
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ChatBotReply {
    pub response: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Definition {
    pub word: String,
    pub definition: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Similarity {
    pub similarity: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Hex {
    pub hex: String,
}
