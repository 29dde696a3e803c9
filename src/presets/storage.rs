use super::types::{default_presented_text, normalize_speed, parse_speed, AnimationPreset, PresetField};
use crate::catalog::{self, Curve, CurveId};
use crate::error::{PlaygroundError, Result};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

const STORE_VERSION: u32 = 1;

#[derive(Deserialize)]
struct StoreFile {
    version: u32,
    presets: Vec<serde_json::Value>,
}

#[derive(Serialize)]
struct StoreFileRef<'a> {
    version: u32,
    presets: &'a [AnimationPreset],
}

/// Presets read from disk plus how many records could not be decoded
struct Loaded {
    presets: Vec<AnimationPreset>,
    skipped: usize,
}

/// Shared, persisted collection of animation presets.
///
/// Clones share the same presets, so an update made through one handle is
/// immediately visible through every other. Each mutation is written to disk
/// before it returns; if the write fails the in-memory change is kept.
#[derive(Debug, Clone)]
pub struct PresetStore {
    presets: Arc<RwLock<Vec<AnimationPreset>>>,
    path: Option<PathBuf>,
}

impl PresetStore {
    /// A store that never touches the disk
    pub fn in_memory() -> Self {
        Self {
            presets: Arc::new(RwLock::new(Vec::new())),
            path: None,
        }
    }

    /// Open the store backed by `path`, loading it when the file exists.
    ///
    /// Records that fail to decode are skipped. A file that is not a store
    /// document at all is `StoreCorrupt`.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let loaded = if path.exists() {
            Self::load(&path)?
        } else {
            info!("No preset store at {}, starting empty", path.display());
            Loaded {
                presets: Vec::new(),
                skipped: 0,
            }
        };

        if loaded.skipped > 0 {
            warn!(
                "Skipped {} undecodable presets in {}",
                loaded.skipped,
                path.display()
            );
        }

        Ok(Self {
            presets: Arc::new(RwLock::new(loaded.presets)),
            path: Some(path),
        })
    }

    /// Open the store, never failing on bad contents.
    ///
    /// A corrupt file, or one with undecodable records, is moved or copied
    /// aside to `<name>.corrupt` and the problem is returned next to the
    /// store so it can be shown to the user.
    pub fn open_or_recover(path: impl Into<PathBuf>) -> Result<(Self, Option<PlaygroundError>)> {
        let path = path.into();
        let backup = corrupt_backup_path(&path);

        if !path.exists() {
            return Ok((Self::open(path)?, None));
        }

        match Self::load(&path) {
            Ok(loaded) if loaded.skipped == 0 => Ok((
                Self {
                    presets: Arc::new(RwLock::new(loaded.presets)),
                    path: Some(path),
                },
                None,
            )),
            Ok(loaded) => {
                warn!(
                    "Skipped {} undecodable presets, original kept at {}",
                    loaded.skipped,
                    backup.display()
                );
                fs::copy(&path, &backup)?;
                let problem = PlaygroundError::StoreCorrupt(format!(
                    "{}: {} presets could not be read",
                    path.display(),
                    loaded.skipped
                ));
                let store = Self {
                    presets: Arc::new(RwLock::new(loaded.presets)),
                    path: Some(path),
                };
                Ok((store, Some(problem)))
            }
            Err(e @ PlaygroundError::StoreCorrupt(_)) => {
                warn!("{}; moving it to {}", e, backup.display());
                fs::rename(&path, &backup)?;
                Ok((Self::open(path)?, Some(e)))
            }
            Err(e) => Err(e),
        }
    }

    fn load(path: &Path) -> Result<Loaded> {
        let content = fs::read_to_string(path)?;
        let file: StoreFile = serde_json::from_str(&content)
            .map_err(|e| PlaygroundError::StoreCorrupt(format!("{}: {}", path.display(), e)))?;

        if file.version > STORE_VERSION {
            return Err(PlaygroundError::StoreCorrupt(format!(
                "{}: unsupported store version {}",
                path.display(),
                file.version
            )));
        }

        let total = file.presets.len();
        let presets: Vec<AnimationPreset> = file
            .presets
            .into_iter()
            .filter_map(|value| match serde_json::from_value::<AnimationPreset>(value) {
                Ok(mut preset) => {
                    preset.speed = normalize_speed(preset.speed);
                    Some(preset)
                }
                Err(e) => {
                    warn!("Skipping undecodable preset: {}", e);
                    None
                }
            })
            .collect();

        info!("Loaded {} presets from {}", presets.len(), path.display());
        Ok(Loaded {
            skipped: total - presets.len(),
            presets,
        })
    }

    fn persist(&self, presets: &[AnimationPreset]) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let content = serde_json::to_string_pretty(&StoreFileRef {
            version: STORE_VERSION,
            presets,
        })?;

        let tmp_path = path.with_extension("json.tmp");
        let written = fs::write(&tmp_path, content).and_then(|_| fs::rename(&tmp_path, path));
        if let Err(e) = written {
            let _ = fs::remove_file(&tmp_path);
            return Err(e.into());
        }
        Ok(())
    }

    /// All presets in insertion order
    pub fn list(&self) -> Vec<AnimationPreset> {
        self.presets.read().clone()
    }

    /// Presets whose curve resolves, paired with that curve.
    ///
    /// Presets with an unknown curve tag are skipped.
    pub fn visible(&self) -> Vec<(AnimationPreset, Curve)> {
        self.presets
            .read()
            .iter()
            .filter_map(|preset| match catalog::resolve(&preset.curve_id) {
                Some(curve) => Some((preset.clone(), curve)),
                None => {
                    warn!(
                        "Skipping preset {:?} with unknown curve {:?}",
                        preset.title, preset.curve_id
                    );
                    None
                }
            })
            .collect()
    }

    pub fn get(&self, id: Uuid) -> Option<AnimationPreset> {
        self.presets.read().iter().find(|p| p.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.presets.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.read().is_empty()
    }

    /// Insert one preset per catalog entry, sorted by title, when the store
    /// is empty. Returns how many presets were inserted.
    pub fn seed_if_empty(&self) -> Result<usize> {
        let mut presets = self.presets.write();
        if !presets.is_empty() {
            return Ok(0);
        }

        let mut seeds: Vec<AnimationPreset> =
            CurveId::ALL.iter().map(|id| AnimationPreset::seed(*id)).collect();
        seeds.sort_by(|a, b| a.title.cmp(&b.title));

        let count = seeds.len();
        presets.extend(seeds);
        info!("Seeded {} animation presets", count);
        self.persist(&presets)?;
        Ok(count)
    }

    /// Append a new preset for `curve`; unmapped curves are stored as `default`
    pub fn create(&self, title: impl Into<String>, curve: &Curve) -> Result<AnimationPreset> {
        let preset = AnimationPreset::new(title, curve);
        let mut presets = self.presets.write();
        presets.push(preset.clone());
        debug!("Created preset {} ({})", preset.title, preset.curve_id);
        self.persist(&presets)?;
        Ok(preset)
    }

    /// Remove the preset with `id`. Returns `false` when it does not exist.
    pub fn delete(&self, id: Uuid) -> Result<bool> {
        let mut presets = self.presets.write();
        let Some(index) = presets.iter().position(|p| p.id == id) else {
            return Ok(false);
        };

        let removed = presets.remove(index);
        debug!("Deleted preset {}", removed.title);
        self.persist(&presets)?;
        Ok(true)
    }

    /// Remove presets by their positions in `list()`. Out-of-range positions
    /// are ignored. Returns how many presets were removed.
    pub fn delete_at(&self, offsets: &[usize]) -> Result<usize> {
        let mut presets = self.presets.write();
        let mut offsets: Vec<usize> = offsets
            .iter()
            .copied()
            .filter(|&i| i < presets.len())
            .collect();
        offsets.sort_unstable();
        offsets.dedup();

        if offsets.is_empty() {
            return Ok(0);
        }

        for &index in offsets.iter().rev() {
            let removed = presets.remove(index);
            debug!("Deleted preset {}", removed.title);
        }
        self.persist(&presets)?;
        Ok(offsets.len())
    }

    /// Set one field of the preset with `id`. Returns `false` when it does not exist.
    pub fn update(&self, id: Uuid, field: PresetField) -> Result<bool> {
        let mut presets = self.presets.write();
        let Some(preset) = presets.iter_mut().find(|p| p.id == id) else {
            return Ok(false);
        };

        debug!("Updating preset {}: {:?}", preset.title, field);
        preset.apply(field);
        self.persist(&presets)?;
        Ok(true)
    }

    /// Store the speed typed by the user; unusable input clears the speed
    pub fn set_speed_input(&self, id: Uuid, input: &str) -> Result<bool> {
        self.update(id, PresetField::Speed(parse_speed(input)))
    }

    /// Finish editing the presented text: an empty text becomes the default greeting
    pub fn commit_presented_text(&self, id: Uuid) -> Result<bool> {
        let mut presets = self.presets.write();
        let Some(preset) = presets.iter_mut().find(|p| p.id == id) else {
            return Ok(false);
        };

        if preset.presented_text.is_empty() {
            preset.presented_text = default_presented_text(&preset.title);
            debug!("Restored default text for {}", preset.title);
            self.persist(&presets)?;
        }
        Ok(true)
    }
}

/// `presets.json` -> `presets.json.corrupt`
fn corrupt_backup_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".corrupt");
    path.with_file_name(name)
}

impl Default for PresetStore {
    fn default() -> Self {
        Self::in_memory()
    }
}
