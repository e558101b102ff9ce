//! Sprite lookup table keyed by [`PieceVisual`].

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{AssetError, AssetResult};
use crate::sprite::{Sprite, SpriteFile};
use crate::types::PieceVisual;

/// One scaled sprite per owner/kind combination.
///
/// Complete by construction: there is no way to build a store with a gap in it.
#[derive(Debug, Clone)]
pub struct AssetStore {
    square_px: u32,
    sprites: Vec<Sprite>,
}

impl AssetStore {
    /// Load `<dir>/<owner>_<kind>.json` for all twelve pieces, scaled to `square_px`.
    pub fn load(dir: impl AsRef<Path>, square_px: u32) -> AssetResult<Self> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(AssetError::DirectoryMissing {
                path: dir.to_path_buf(),
            });
        }

        let store = Self::try_from_fn(square_px, |visual| {
            let path = sprite_path(dir, visual);
            load_sprite(&path)
        })?;

        tracing::info!(dir = %dir.display(), square_px, "loaded piece sprites");
        Ok(store)
    }

    /// Build from a sprite factory. Each result is scaled to `square_px`.
    pub fn from_fn(square_px: u32, mut f: impl FnMut(PieceVisual) -> Sprite) -> Self {
        let square_px = square_px.max(1);
        let sprites = PieceVisual::all()
            .map(|v| f(v).scaled(square_px, square_px))
            .collect();
        Self { square_px, sprites }
    }

    fn try_from_fn(
        square_px: u32,
        mut f: impl FnMut(PieceVisual) -> AssetResult<Sprite>,
    ) -> AssetResult<Self> {
        let square_px = square_px.max(1);
        let sprites = PieceVisual::all()
            .map(|v| f(v).map(|s| s.scaled(square_px, square_px)))
            .collect::<AssetResult<Vec<_>>>()?;
        Ok(Self { square_px, sprites })
    }

    pub fn square_px(&self) -> u32 {
        self.square_px
    }

    pub fn sprite(&self, visual: PieceVisual) -> &Sprite {
        &self.sprites[visual.index()]
    }
}

/// Where the sprite for `visual` lives under `dir`.
pub fn sprite_path(dir: &Path, visual: PieceVisual) -> PathBuf {
    dir.join(format!("{}.json", visual.asset_name()))
}

fn load_sprite(path: &Path) -> AssetResult<Sprite> {
    let text = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            AssetError::Missing {
                path: path.to_path_buf(),
            }
        } else {
            AssetError::Unreadable {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let file: SpriteFile =
        serde_json::from_str(&text).map_err(|source| AssetError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;

    file.decode().map_err(|message| AssetError::Invalid {
        path: path.to_path_buf(),
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PieceKind, Player, Rgba};
    use std::sync::atomic::{AtomicUsize, Ordering};

    const TINY: &str = r##"{"width":2,"height":2,"palette":{"#":"#102030"},"rows":["#.",".#"]}"##;

    /// Fresh scratch directory under the system temp dir.
    fn scratch_dir(tag: &str) -> PathBuf {
        static NEXT: AtomicUsize = AtomicUsize::new(0);
        let n = NEXT.fetch_add(1, Ordering::Relaxed);
        let dir = std::env::temp_dir().join(format!(
            "click-chess-assets-{}-{}-{}",
            tag,
            std::process::id(),
            n
        ));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn write_all_sprites(dir: &Path) {
        for v in PieceVisual::all() {
            fs::write(sprite_path(dir, v), TINY).unwrap();
        }
    }

    #[test]
    fn loads_and_scales_every_piece() {
        let dir = scratch_dir("ok");
        write_all_sprites(&dir);

        let store = AssetStore::load(&dir, 8).unwrap();
        for v in PieceVisual::all() {
            let s = store.sprite(v);
            assert_eq!((s.width(), s.height()), (8, 8));
            assert_eq!(s.get(0, 0), Rgba::new(0x10, 0x20, 0x30, 255));
            assert_eq!(s.get(7, 0), Rgba::TRANSPARENT);
        }
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_sprite_is_an_error() {
        let dir = scratch_dir("missing");
        write_all_sprites(&dir);
        let gone = PieceVisual::new(Player::Two, PieceKind::King);
        fs::remove_file(sprite_path(&dir, gone)).unwrap();

        match AssetStore::load(&dir, 8) {
            Err(AssetError::Missing { path }) => assert!(path.ends_with("black_king.json")),
            other => panic!("expected Missing, got {other:?}"),
        }
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn malformed_sprite_is_an_error() {
        let dir = scratch_dir("malformed");
        write_all_sprites(&dir);
        let bad = PieceVisual::new(Player::One, PieceKind::Pawn);
        fs::write(sprite_path(&dir, bad), "{ not json").unwrap();

        assert!(matches!(
            AssetStore::load(&dir, 8),
            Err(AssetError::Malformed { .. })
        ));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn inconsistent_sprite_is_an_error() {
        let dir = scratch_dir("invalid");
        write_all_sprites(&dir);
        let bad = PieceVisual::new(Player::One, PieceKind::Rook);
        fs::write(
            sprite_path(&dir, bad),
            r##"{"width":3,"height":1,"rows":["..."," "]}"##,
        )
        .unwrap();

        assert!(matches!(
            AssetStore::load(&dir, 8),
            Err(AssetError::Invalid { .. })
        ));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = std::env::temp_dir().join("click-chess-assets-does-not-exist");
        assert!(matches!(
            AssetStore::load(&dir, 8),
            Err(AssetError::DirectoryMissing { .. })
        ));
    }

    #[test]
    fn shipped_sprites_load() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../assets/sprites");
        let store = AssetStore::load(&dir, 64).unwrap();
        assert_eq!(store.square_px(), 64);
        assert_eq!(
            store
                .sprite(PieceVisual::new(Player::One, PieceKind::Queen))
                .width(),
            64
        );
    }

    #[test]
    fn from_fn_fills_every_slot() {
        let store = AssetStore::from_fn(4, |v| {
            Sprite::solid(1, 1, Rgba::new(v.index() as u8, 0, 0, 255))
        });
        for v in PieceVisual::all() {
            assert_eq!(store.sprite(v).get(3, 3).r, v.index() as u8);
        }
    }
}
