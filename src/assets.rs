use macroquad::prelude::*;

/// Images and the UI font, loaded once at startup. A missing file is fatal.
pub struct Assets {
    background: Texture2D,
    button: Texture2D,
    timer: Texture2D,
    font: Font,
}

async fn load_image(path: &str) -> Texture2D {
    load_texture(path)
        .await
        .unwrap_or_else(|e| panic!("Failed to load {path}: {e:?}"))
}

async fn load_font() -> Font {
    let path = "assets/DejaVuSans.ttf";
    load_ttf_font(path)
        .await
        .unwrap_or_else(|e| panic!("Failed to load {path}: {e:?}"))
}

impl Assets {
    pub async fn load() -> Self {
        Self {
            background: load_image("assets/bg.png").await,
            button: load_image("assets/button.png").await,
            timer: load_image("assets/timer.png").await,
            font: load_font().await,
        }
    }

    pub(crate) fn background(&self) -> &Texture2D {
        &self.background
    }

    pub(crate) fn button(&self) -> &Texture2D {
        &self.button
    }

    pub(crate) fn timer(&self) -> &Texture2D {
        &self.timer
    }

    pub(crate) fn font(&self) -> &Font {
        &self.font
    }
}
