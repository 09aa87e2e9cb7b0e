use bevy::prelude::*;
use bevy_args::{
    Deserialize,
    Parser,
    Serialize,
};

use crate::settings::MeadowSettings;


#[derive(
    Debug,
    Resource,
    Serialize,
    Deserialize,
    Parser,
)]
#[command(about = "bevy_meadow viewer", version, long_about = None)]
pub struct MeadowViewer {
    #[arg(long, default_value = "true")]
    pub editor: bool,

    #[arg(long, default_value = "true")]
    pub press_esc_close: bool,

    #[arg(long, default_value = "true")]
    pub show_fps: bool,

    #[arg(long, default_value = "1920.0")]
    pub width: f32,

    #[arg(long, default_value = "1080.0")]
    pub height: f32,

    #[arg(long, default_value = "bevy_meadow")]
    pub name: String,

    #[arg(long, default_value = "15")]
    pub cloud_count: usize,

    #[arg(long, default_value = "200")]
    pub tree_count: usize,

    #[arg(long, default_value = "200")]
    pub ornament_count: usize,
}

impl Default for MeadowViewer {
    fn default() -> MeadowViewer {
        MeadowViewer {
            editor: true,
            press_esc_close: true,
            show_fps: true,
            width: 1920.0,
            height: 1080.0,
            name: "bevy_meadow".to_string(),
            cloud_count: 15,
            tree_count: 200,
            ornament_count: 200,
        }
    }
}

impl MeadowViewer {
    /// Scene settings carrying this invocation's population counts.
    pub fn settings(&self) -> MeadowSettings {
        MeadowSettings {
            cloud_count: self.cloud_count,
            tree_count: self.tree_count,
            ornament_count: self.ornament_count,
            ..MeadowSettings::default()
        }
    }
}


pub fn setup_hooks() {
    #[cfg(debug_assertions)]
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
    }
}


pub fn log(_msg: &str) {
    #[cfg(debug_assertions)]
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::console::log_1(&_msg.into());
    }
    #[cfg(debug_assertions)]
    #[cfg(not(target_arch = "wasm32"))]
    {
        println!("{}", _msg);
    }
}
