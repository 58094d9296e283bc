// Random appearance selection for spawned humans

use glam::Vec4;
use log::error;
use rand::Rng;

use crate::engine::color::ColorSource;

/// An appearance step could not run because its configuration was missing.
///
/// These are logged and skipped rather than failing the spawn: a human with a
/// partial appearance is preferable to no human at all.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AppearanceError {
    /// A variant list needed for randomization was empty
    #[error("no {0} configured")]
    MissingConfiguration(&'static str),
}

/// Cosmetic gender of a human. Carries no gameplay logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gender {
    Male,
    Female,
    #[default]
    Other,
}

/// Visual variant lists for a human, plus the choices made at spawn.
///
/// The host provides the variant names (meshes it can enable, surfaces it can
/// tint); `randomize` records which of them to use.
#[derive(Debug, Clone, Default)]
pub struct Appearance {
    /// Body-type variants the host can enable (exactly one gets chosen)
    pub body_types: Vec<String>,
    /// Hair-style variants; a human may also end up with none of them
    pub hair_styles: Vec<String>,
    /// Body-part surfaces to tint uniformly with the skin color
    pub body_parts: Vec<String>,
    /// Cosmetic gender
    pub gender: Gender,

    body_type: Option<usize>,
    hair_style: Option<usize>,
    bald: bool,
    skin_color: Option<Vec4>,
}

impl Appearance {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the body-type variant list
    pub fn with_body_types(mut self, names: &[&str]) -> Self {
        self.body_types = names.iter().map(|n| n.to_string()).collect();
        self
    }

    /// Set the hair-style variant list
    pub fn with_hair_styles(mut self, names: &[&str]) -> Self {
        self.hair_styles = names.iter().map(|n| n.to_string()).collect();
        self
    }

    /// Set the list of surfaces to tint with the skin color
    pub fn with_body_parts(mut self, names: &[&str]) -> Self {
        self.body_parts = names.iter().map(|n| n.to_string()).collect();
        self
    }

    /// Set the cosmetic gender
    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = gender;
        self
    }

    /// Run all appearance steps, best effort.
    ///
    /// Each step is independent; a step with missing configuration logs an
    /// error and is skipped while the others still run.
    pub fn randomize<R: Rng, C: ColorSource>(&mut self, rng: &mut R, colors: &mut C) {
        if let Err(e) = self.pick_skin_tone(colors) {
            error!("skin tone: {}", e);
        }
        if let Err(e) = self.pick_body_type(rng) {
            error!("body type: {}", e);
        }
        if let Err(e) = self.pick_hair_style(rng) {
            error!("hair style: {}", e);
        }
    }

    /// Choose one body-type variant uniformly at random
    pub fn pick_body_type<R: Rng>(&mut self, rng: &mut R) -> Result<usize, AppearanceError> {
        if self.body_types.is_empty() {
            return Err(AppearanceError::MissingConfiguration("body types"));
        }

        let index = rng.gen_range(0..self.body_types.len());
        self.body_type = Some(index);
        Ok(index)
    }

    /// Choose a hair style uniformly among N styles plus one implicit "none"
    /// outcome, so a human is bald with probability 1/(N+1).
    pub fn pick_hair_style<R: Rng>(
        &mut self,
        rng: &mut R,
    ) -> Result<Option<usize>, AppearanceError> {
        if self.hair_styles.is_empty() {
            return Err(AppearanceError::MissingConfiguration("hair styles"));
        }

        let index = rng.gen_range(0..=self.hair_styles.len());
        if index < self.hair_styles.len() {
            self.hair_style = Some(index);
            self.bald = false;
            Ok(Some(index))
        } else {
            self.hair_style = None;
            self.bald = true;
            Ok(None)
        }
    }

    /// Take a color from the collaborator and mark every listed body part to
    /// be tinted with it. The color is recorded even when no parts are
    /// configured, matching the spawn order of the original behavior.
    pub fn pick_skin_tone<C: ColorSource>(&mut self, colors: &mut C) -> Result<Vec4, AppearanceError> {
        let color = colors.color();
        self.skin_color = Some(color);

        if self.body_parts.is_empty() {
            return Err(AppearanceError::MissingConfiguration("body parts"));
        }

        Ok(color)
    }

    /// Index of the chosen body type, if one was picked
    pub fn body_type(&self) -> Option<usize> {
        self.body_type
    }

    /// Index of the chosen hair style; `None` before randomization or when bald
    pub fn hair_style(&self) -> Option<usize> {
        self.hair_style
    }

    /// Did the hair roll land on the implicit "none" outcome?
    pub fn is_bald(&self) -> bool {
        self.bald
    }

    /// Skin tint applied to the listed body parts
    pub fn skin_color(&self) -> Option<Vec4> {
        self.skin_color
    }
}
