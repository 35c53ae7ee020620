//! The tabbed brand kit side panel.

use std::sync::Arc;

use brandkit_core::models::asset::{Asset, CreateAsset};
use brandkit_core::models::color::{Color, CreateColor};
use brandkit_core::models::typography::{CreateTypography, Typography};

use super::{AssetPanel, ColorPanel, Panel, TypographyPanel};
use crate::config::ClientConfig;
use crate::context::{BrandKit, HttpAssets, HttpColors, HttpTypography, ResourceContext};
use crate::editor::CanvasEditor;
use crate::error::ClientError;
use crate::list::LoadOutcome;
use crate::upload::{HttpUploader, Uploader};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BrandKitTab {
    #[default]
    Colors,
    Fonts,
    Assets,
}

/// Colors, fonts and assets panels behind tabs. Only the active tab loads.
pub struct BrandKitPanel<C, T, A>
where
    C: ResourceContext<Entity = Color, Draft = CreateColor>,
    T: ResourceContext<Entity = Typography, Draft = CreateTypography>,
    A: ResourceContext<Entity = Asset, Draft = CreateAsset>,
{
    pub colors: Panel<ColorPanel, C>,
    pub fonts: Panel<TypographyPanel, T>,
    pub assets: Panel<AssetPanel, A>,
    active: BrandKitTab,
}

impl<C, T, A> BrandKitPanel<C, T, A>
where
    C: ResourceContext<Entity = Color, Draft = CreateColor>,
    T: ResourceContext<Entity = Typography, Draft = CreateTypography>,
    A: ResourceContext<Entity = Asset, Draft = CreateAsset>,
{
    pub fn new(
        kit: &BrandKit<C, T, A>,
        editor: Arc<dyn CanvasEditor>,
        uploader: Arc<dyn Uploader>,
        config: &ClientConfig,
    ) -> Self {
        Self {
            colors: Panel::new(ColorPanel, Arc::clone(&kit.colors), Arc::clone(&editor), config),
            fonts: Panel::new(
                TypographyPanel,
                Arc::clone(&kit.typography),
                Arc::clone(&editor),
                config,
            ),
            assets: Panel::new(AssetPanel::new(uploader), Arc::clone(&kit.assets), editor, config),
            active: BrandKitTab::default(),
        }
    }

    pub fn active_tab(&self) -> BrandKitTab {
        self.active
    }

    /// Switch tabs and load the newly active panel if it is still empty.
    pub async fn select_tab(&mut self, tab: BrandKitTab) -> Result<LoadOutcome, ClientError> {
        self.active = tab;
        self.open().await
    }

    /// Load the active panel's first page.
    pub async fn open(&self) -> Result<LoadOutcome, ClientError> {
        match self.active {
            BrandKitTab::Colors => self.colors.open().await,
            BrandKitTab::Fonts => self.fonts.open().await,
            BrandKitTab::Assets => self.assets.open().await,
        }
    }
}

impl BrandKitPanel<HttpColors, HttpTypography, HttpAssets> {
    /// Panels talking to the REST API at `config.base_url`.
    pub fn http(config: &ClientConfig, editor: Arc<dyn CanvasEditor>) -> Self {
        let kit = BrandKit::http(config);
        let uploader = Arc::new(HttpUploader::new(&config.base_url));
        Self::new(&kit, editor, uploader, config)
    }
}
