//! The public client: one method per upstream endpoint.
//!
//! Every method builds a [`Request`] with its fixed path and forwards it to
//! the dispatcher, declaring statically whether the endpoint answers with
//! JSON or with raw image bytes. Errors propagate unchanged.

use bytes::Bytes;

use crate::error::Result;
use crate::http::{Dispatcher, Request};
use crate::models::{
    AnimalFact, AnimeQuote, AnimuLink, BotToken, ChatBotReply, Definition, Hex, Joke, Lyrics,
    Meme, MinecraftProfile, Pokemon, Rgb, Similarity,
};

/// Client for the Some Random API.
///
/// Holds an optional API token, fixed at construction, which is forwarded as
/// the `key` query parameter to the endpoints that accept authorization.
/// Cloning shares the underlying connection pool.
#[derive(Clone)]
pub struct SraClient {
    dispatcher: Dispatcher,
    token: Option<String>,
}

impl Default for SraClient {
    fn default() -> Self {
        Self::new()
    }
}

impl SraClient {
    /// Unauthenticated client against the production API.
    pub fn new() -> Self {
        Self {
            dispatcher: Dispatcher::new(),
            token: None,
        }
    }

    /// Client carrying an API token for the token-capable endpoints.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            dispatcher: Dispatcher::new(),
            token: Some(token.into()),
        }
    }

    /// Rebase the client onto another server. Used by tests to point at a
    /// local mock.
    pub fn with_base_url(mut self, base: &str) -> Result<Self> {
        self.dispatcher = Dispatcher::with_base(base)?;
        Ok(self)
    }

    /// The token passed at construction, if any.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn key(&self) -> Option<&str> {
        self.token.as_deref()
    }

    async fn animal(&self, path: &str) -> Result<AnimalFact> {
        self.dispatcher.dispatch_json(Request::new(path)).await
    }

    async fn animu(&self, path: &str) -> Result<AnimuLink> {
        self.dispatcher.dispatch_json(Request::new(path)).await
    }

    /// Shared shape of most `canvas/*` filters: one avatar in, an image out.
    async fn canvas(&self, path: &str, avatar: &str) -> Result<Bytes> {
        let request = Request::new(path)
            .with_query("avatar", avatar)
            .with_key(self.key());
        self.dispatcher.dispatch_bytes(request).await
    }

    // --- animal facts ---

    /// Random image and fact of a dog.
    pub async fn dog(&self) -> Result<AnimalFact> {
        self.animal("animal/dog").await
    }

    /// Random image and fact of a cat.
    pub async fn cat(&self) -> Result<AnimalFact> {
        self.animal("animal/cat").await
    }

    /// Random image and fact of a panda.
    pub async fn panda(&self) -> Result<AnimalFact> {
        self.animal("animal/panda").await
    }

    /// Random image and fact of a red panda.
    pub async fn red_panda(&self) -> Result<AnimalFact> {
        self.animal("animal/red_panda").await
    }

    /// Random image and fact of a koala.
    pub async fn koala(&self) -> Result<AnimalFact> {
        self.animal("animal/koala").await
    }

    /// Random image and fact of a bird.
    pub async fn bird(&self) -> Result<AnimalFact> {
        self.animal("animal/bird").await
    }

    /// Random image and fact of a raccoon.
    pub async fn raccoon(&self) -> Result<AnimalFact> {
        self.animal("animal/raccoon").await
    }

    /// Random image and fact of a kangaroo.
    pub async fn kangaroo(&self) -> Result<AnimalFact> {
        self.animal("animal/kangaroo").await
    }

    /// Random image and fact of a fox.
    pub async fn fox(&self) -> Result<AnimalFact> {
        self.animal("animal/fox").await
    }

    /// Random image and fact of a birb.
    pub async fn birb(&self) -> Result<AnimalFact> {
        self.animal("animal/birb").await
    }

    /// Random image and fact of a whale.
    pub async fn whale(&self) -> Result<AnimalFact> {
        self.animal("animal/whale").await
    }

    // --- animu ---

    /// Random winking gif.
    pub async fn wink(&self) -> Result<AnimuLink> {
        self.animu("animu/wink").await
    }

    /// Random patting gif.
    pub async fn pat(&self) -> Result<AnimuLink> {
        self.animu("animu/pat").await
    }

    /// Random hugging gif.
    pub async fn hug(&self) -> Result<AnimuLink> {
        self.animu("animu/hug").await
    }

    /// Random quote from an anime.
    pub async fn anime_quote(&self) -> Result<AnimeQuote> {
        self.dispatcher
            .dispatch_json(Request::new("animu/quote"))
            .await
    }

    // --- misc ---

    /// Search for song lyrics by title.
    pub async fn lyrics(&self, title: &str) -> Result<Lyrics> {
        let request = Request::new("lyrics").with_query("title", title);
        self.dispatcher.dispatch_json(request).await
    }

    /// A random joke.
    pub async fn joke(&self) -> Result<Joke> {
        self.dispatcher.dispatch_json(Request::new("joke")).await
    }

    /// Pokedex entry for a pokemon by name.
    pub async fn pokedex(&self, pokemon: &str) -> Result<Pokemon> {
        let request = Request::new("pokedex").with_query("pokemon", pokemon);
        self.dispatcher.dispatch_json(request).await
    }

    /// Minecraft profile and name history for a player.
    pub async fn minecraft(&self, username: &str) -> Result<MinecraftProfile> {
        let request = Request::new("mc").with_query("username", username);
        self.dispatcher.dispatch_json(request).await
    }

    /// A random meme.
    pub async fn meme(&self) -> Result<Meme> {
        self.dispatcher.dispatch_json(Request::new("meme")).await
    }

    /// A fake "real looking" Discord bot token, optionally derived from an
    /// application id.
    pub async fn discord_bot_token(&self, id: Option<u64>) -> Result<BotToken> {
        let request = Request::new("bottoken").with_query_opt("id", id);
        self.dispatcher.dispatch_json(request).await
    }

    /// Talk to the chat bot. Requires a token.
    pub async fn chat_bot(&self, message: &str) -> Result<ChatBotReply> {
        let request = Request::new("chatbot")
            .with_query("message", message)
            .with_key(self.key());
        self.dispatcher.dispatch_json(request).await
    }

    /// Dictionary definition of a word.
    pub async fn dictionary(&self, word: &str) -> Result<Definition> {
        let request = Request::new("dictionary").with_query("word", word);
        self.dispatcher.dispatch_json(request).await
    }

    /// Similarity score between two strings.
    pub async fn string_similarity(&self, first: &str, second: &str) -> Result<Similarity> {
        let request = Request::new("stringsimilarity")
            .with_query("string1", first)
            .with_query("string2", second);
        self.dispatcher.dispatch_json(request).await
    }

    /// Convert an RGB triple (e.g. `"255,0,0"`) into a hex code.
    pub async fn hex(&self, rgb: &str) -> Result<Hex> {
        let request = Request::new("canvas/hex")
            .with_query("rgb", rgb)
            .with_key(self.key());
        self.dispatcher.dispatch_json(request).await
    }

    /// Convert a hex code (without `#`) into an RGB triple.
    pub async fn rgb(&self, hex: &str) -> Result<Rgb> {
        let request = Request::new("canvas/rgb")
            .with_query("hex", hex)
            .with_key(self.key());
        self.dispatcher.dispatch_json(request).await
    }

    // --- canvas filters (binary payloads) ---

    /// Make an image more gay.
    pub async fn gay(&self, avatar: &str) -> Result<Bytes> {
        self.canvas("canvas/gay", avatar).await
    }

    /// Mosaic glass effect.
    pub async fn glass(&self, avatar: &str) -> Result<Bytes> {
        self.canvas("canvas/glass", avatar).await
    }

    /// GTA-style "wasted" overlay.
    pub async fn wasted(&self, avatar: &str) -> Result<Bytes> {
        self.canvas("canvas/wasted", avatar).await
    }

    /// "Mission passed, respect +100" overlay.
    pub async fn passed(&self, avatar: &str) -> Result<Bytes> {
        self.canvas("canvas/passed", avatar).await
    }

    /// Put an image behind bars.
    pub async fn jail(&self, avatar: &str) -> Result<Bytes> {
        self.canvas("canvas/jail", avatar).await
    }

    /// Soviet flag overlay.
    pub async fn comrade(&self, avatar: &str) -> Result<Bytes> {
        self.canvas("canvas/comrade", avatar).await
    }

    /// *Triggered* gif.
    pub async fn triggered(&self, avatar: &str) -> Result<Bytes> {
        self.canvas("canvas/triggered", avatar).await
    }

    /// Greyscale filter.
    pub async fn greyscale(&self, avatar: &str) -> Result<Bytes> {
        self.canvas("canvas/greyscale", avatar).await
    }

    /// Invert filter.
    pub async fn invert(&self, avatar: &str) -> Result<Bytes> {
        self.canvas("canvas/invert", avatar).await
    }

    /// Invert and greyscale filters combined.
    pub async fn invert_greyscale(&self, avatar: &str) -> Result<Bytes> {
        self.canvas("canvas/invertgreyscale", avatar).await
    }

    /// Brightness filter with an optional level.
    pub async fn brightness(&self, avatar: &str, brightness: Option<u8>) -> Result<Bytes> {
        let request = Request::new("canvas/brightness")
            .with_query("avatar", avatar)
            .with_query_opt("brightness", brightness)
            .with_key(self.key());
        self.dispatcher.dispatch_bytes(request).await
    }

    /// Threshold filter with an optional level.
    pub async fn threshold(&self, avatar: &str, threshold: Option<u8>) -> Result<Bytes> {
        let request = Request::new("canvas/threshold")
            .with_query("avatar", avatar)
            .with_query_opt("threshold", threshold)
            .with_key(self.key());
        self.dispatcher.dispatch_bytes(request).await
    }

    /// Sepia filter.
    pub async fn sepia(&self, avatar: &str) -> Result<Bytes> {
        self.canvas("canvas/sepia", avatar).await
    }

    /// Red tint.
    pub async fn red(&self, avatar: &str) -> Result<Bytes> {
        self.canvas("canvas/red", avatar).await
    }

    /// Green tint.
    pub async fn green(&self, avatar: &str) -> Result<Bytes> {
        self.canvas("canvas/green", avatar).await
    }

    /// Blue tint.
    pub async fn blue(&self, avatar: &str) -> Result<Bytes> {
        self.canvas("canvas/blue", avatar).await
    }

    /// Discord "blurple" tint.
    pub async fn blurple(&self, avatar: &str) -> Result<Bytes> {
        self.canvas("canvas/blurple", avatar).await
    }

    /// The newer Discord blurple tint.
    pub async fn blurple2(&self, avatar: &str) -> Result<Bytes> {
        self.canvas("canvas/blurple2", avatar).await
    }

    /// Tint with an arbitrary hex color (without `#`).
    pub async fn color(&self, avatar: &str, color: &str) -> Result<Bytes> {
        let request = Request::new("canvas/color")
            .with_query("avatar", avatar)
            .with_query("color", color);
        self.dispatcher.dispatch_bytes(request).await
    }

    /// Pixelate filter.
    pub async fn pixelate(&self, avatar: &str) -> Result<Bytes> {
        self.canvas("canvas/pixelate", avatar).await
    }

    /// Blur filter.
    pub async fn blur(&self, avatar: &str) -> Result<Bytes> {
        self.canvas("canvas/blur", avatar).await
    }

    /// Fake YouTube comment image.
    pub async fn youtube_comment(
        &self,
        avatar: &str,
        username: &str,
        comment: &str,
    ) -> Result<Bytes> {
        let request = Request::new("canvas/youtube-comment")
            .with_query("avatar", avatar)
            .with_query("username", username)
            .with_query("comment", comment)
            .with_key(self.key());
        self.dispatcher.dispatch_bytes(request).await
    }

    /// Fake tweet image.
    pub async fn tweet(
        &self,
        avatar: &str,
        username: &str,
        display_name: &str,
        comment: &str,
    ) -> Result<Bytes> {
        let request = Request::new("canvas/tweet")
            .with_query("avatar", avatar)
            .with_query("username", username)
            .with_query("displayname", display_name)
            .with_query("comment", comment)
            .with_key(self.key());
        self.dispatcher.dispatch_bytes(request).await
    }

    /// "It's so stupid" meme with an avatar and a dog.
    pub async fn its_so_stupid(&self, avatar: &str, dog: &str) -> Result<Bytes> {
        let request = Request::new("canvas/its-so-stupid")
            .with_query("avatar", avatar)
            .with_query("dog", dog)
            .with_key(self.key());
        self.dispatcher.dispatch_bytes(request).await
    }

    /// "SIMP" card.
    pub async fn simp_card(&self, avatar: &str) -> Result<Bytes> {
        self.canvas("canvas/simpcard", avatar).await
    }

    /// "Horny" card.
    pub async fn horny_card(&self, avatar: &str) -> Result<Bytes> {
        self.canvas("canvas/hornycard", avatar).await
    }

    /// Loli police meme.
    pub async fn lolice(&self, avatar: &str) -> Result<Bytes> {
        self.canvas("canvas/lolice", avatar).await
    }

    /// Render a solid color swatch from a hex code (without `#`).
    pub async fn color_viewer(&self, hex: &str) -> Result<Bytes> {
        let request = Request::new("canvas/color")
            .with_query("hex", hex)
            .with_key(self.key());
        self.dispatcher.dispatch_bytes(request).await
    }

    /// "Petpet" gif. Premium endpoint.
    pub async fn petpet(&self, avatar: &str) -> Result<Bytes> {
        let request = Request::new("premium/petpet")
            .with_query("avatar", avatar)
            .with_key(self.key());
        self.dispatcher.dispatch_bytes(request).await
    }
}
