use super::Grid;
use crate::error::{InvalidArgument, Result};
use crate::{NodeID, Path};

use image::{Rgba, RgbaImage};

/// The colors that give the pixels of a maze image their meaning.
///
/// Colors are compared by their RGB channels only; alpha is ignored.
///
/// Default colors:
/// ```
/// # use maze_pathfinding::Palette;
/// assert_eq!(
/// 	Palette {
/// 		wall: [0x00, 0x00, 0x00],
/// 		entry: [0xFF, 0x00, 0x00],
/// 		exit: [0x00, 0xFF, 0x00],
/// 		path: [0x00, 0x00, 0xFF],
/// 	},
/// 	Default::default()
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
	/// Pixels of exactly this color are not traversable (defaults to black)
	pub wall: [u8; 3],
	/// The pixel where the maze starts (defaults to red)
	pub entry: [u8; 3],
	/// The pixel where the maze ends (defaults to green)
	pub exit: [u8; 3],
	/// The color [`plot_path`](ImageGrid::plot_path) is usually called with (defaults to blue)
	pub path: [u8; 3],
}

impl Palette {
	/// The default Palette as a constant
	pub const DEFAULT: Palette = Palette {
		wall: [0x00, 0x00, 0x00],
		entry: [0xFF, 0x00, 0x00],
		exit: [0x00, 0xFF, 0x00],
		path: [0x00, 0x00, 0xFF],
	};
}

impl Default for Palette {
	fn default() -> Palette {
		Palette::DEFAULT
	}
}

/// A [`Grid`] backed by an RGBA image, classified through a [`Palette`].
///
/// ## Examples
/// ```
/// use image::{Rgba, RgbaImage};
/// use maze_pathfinding::{Grid, ImageGrid, Palette};
///
/// let mut image = RgbaImage::from_pixel(3, 1, Rgba([255, 255, 255, 255]));
/// image.put_pixel(0, 0, Rgba([255, 0, 0, 255]));
/// image.put_pixel(2, 0, Rgba([0, 255, 0, 255]));
///
/// let mut grid = ImageGrid::new(image, Palette::default()).unwrap();
/// let path = maze_pathfinding::solve(&grid).unwrap();
/// assert_eq!(path.cost(), 2.0);
///
/// grid.plot_path(&path, 0, Palette::default().path);
/// assert_eq!(grid.image().get_pixel(1, 0), &Rgba([0, 0, 255, 255]));
/// ```
#[derive(Clone, Debug)]
pub struct ImageGrid {
	image: RgbaImage,
	palette: Palette,
}

impl ImageGrid {
	/// Wraps `image`. Fails if the image has no pixels.
	pub fn new(image: RgbaImage, palette: Palette) -> Result<ImageGrid> {
		if image.width() == 0 || image.height() == 0 {
			return Err(InvalidArgument::EmptyGrid {
				width: image.width() as usize,
				height: image.height() as usize,
			}
			.into());
		}
		Ok(ImageGrid { image, palette })
	}

	/// The Palette used for classification
	pub fn palette(&self) -> &Palette {
		&self.palette
	}

	/// The underlying image
	pub fn image(&self) -> &RgbaImage {
		&self.image
	}

	/// Unwraps the underlying image, e.g. to save it after painting a Path
	pub fn into_image(self) -> RgbaImage {
		self.image
	}

	/// Paints `path` onto the image.
	///
	/// Every Node of the Path is drawn as a square of `2 * brush_radius + 1` pixels centered on
	/// the Node, clipped to the image. Wall pixels are left untouched.
	pub fn plot_path(&mut self, path: &Path, brush_radius: usize, color: [u8; 3]) {
		let color = Rgba([color[0], color[1], color[2], 0xFF]);
		let (width, height) = (self.width(), self.height());
		for &node in path.iter() {
			let (cx, cy) = self.point_of(node);
			if cy >= height {
				continue;
			}
			// the image is never empty, so `width - 1` and `height - 1` can't underflow
			let xs =
				cx.saturating_sub(brush_radius)..=cx.saturating_add(brush_radius).min(width - 1);
			let ys =
				cy.saturating_sub(brush_radius)..=cy.saturating_add(brush_radius).min(height - 1);
			for y in ys {
				for x in xs.clone() {
					if self.is_traversable(y * width + x) {
						self.image.put_pixel(x as u32, y as u32, color);
					}
				}
			}
		}
	}

	fn rgb(&self, index: NodeID) -> Option<[u8; 3]> {
		let (x, y) = self.point_of(index);
		if y >= self.height() {
			return None;
		}
		let [r, g, b, _] = self.image.get_pixel(x as u32, y as u32).0;
		Some([r, g, b])
	}
}

impl Grid for ImageGrid {
	fn width(&self) -> usize {
		self.image.width() as usize
	}
	fn height(&self) -> usize {
		self.image.height() as usize
	}
	fn is_traversable(&self, index: NodeID) -> bool {
		self.rgb(index).map_or(false, |c| c != self.palette.wall)
	}
	fn is_entry(&self, index: NodeID) -> bool {
		self.rgb(index) == Some(self.palette.entry)
	}
	fn is_exit(&self, index: NodeID) -> bool {
		self.rgb(index) == Some(self.palette.exit)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{error::Marker, Error, Graph};

	const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
	const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

	fn maze(rows: &[&str]) -> RgbaImage {
		RgbaImage::from_fn(rows[0].len() as u32, rows.len() as u32, |x, y| {
			match rows[y as usize].as_bytes()[x as usize] {
				b'#' => BLACK,
				b'S' => Rgba([255, 0, 0, 255]),
				b'E' => Rgba([0, 255, 0, 128]), // alpha is ignored
				_ => WHITE,
			}
		})
	}

	#[test]
	fn classification() {
		let grid = ImageGrid::new(maze(&["S#", ".E"]), Palette::default()).unwrap();
		assert!(grid.is_entry(0));
		assert!(grid.is_traversable(0));
		assert!(!grid.is_traversable(1));
		assert!(grid.is_exit(3));
		assert!(grid.is_traversable(3));
		assert!(!grid.is_traversable(4));
	}

	#[test]
	fn custom_palette() {
		let palette = Palette {
			wall: [255, 255, 255],
			..Palette::DEFAULT
		};
		let grid = ImageGrid::new(maze(&["S#."]), palette).unwrap();
		assert!(grid.is_traversable(1));
		assert!(!grid.is_traversable(2));
	}

	#[test]
	fn missing_exit() {
		let grid = ImageGrid::new(maze(&["S.."]), Palette::default()).unwrap();
		assert_eq!(
			Graph::build(&grid).unwrap_err(),
			Error::Configuration(Marker::Exit)
		);
	}

	#[test]
	fn brush_larger_than_image() {
		let mut grid = ImageGrid::new(maze(&["S.E"]), Palette::default()).unwrap();
		let path = crate::solve(&grid).unwrap();

		grid.plot_path(&path, usize::MAX, [0, 0, 255]);
		for x in 0..3 {
			assert_eq!(grid.image().get_pixel(x, 0), &Rgba([0, 0, 255, 255]));
		}

		let mut grid = ImageGrid::new(maze(&["#.#", "S.E", "#.#"]), Palette::default()).unwrap();
		let path = crate::solve(&grid).unwrap();
		grid.plot_path(&path, 100_000, [0, 0, 255]);
		let image = grid.into_image();
		for (x, y) in [(0, 0), (2, 0), (0, 2), (2, 2)] {
			assert_eq!(image.get_pixel(x, y), &BLACK);
		}
		for (x, y) in [(1, 0), (0, 1), (1, 1), (2, 1), (1, 2)] {
			assert_eq!(image.get_pixel(x, y), &Rgba([0, 0, 255, 255]));
		}
	}

	#[test]
	fn plot_path_keeps_walls() {
		let mut grid = ImageGrid::new(
			maze(&[
				"#####", //
				"S...E", //
				"#####", //
			]),
			Palette::default(),
		)
		.unwrap();
		let path = crate::solve(&grid).unwrap();
		assert_eq!(path.len(), 5);

		let blue = Rgba([0, 0, 255, 255]);
		grid.plot_path(&path, 1, [0, 0, 255]);
		let image = grid.into_image();
		for x in 0..5 {
			assert_eq!(image.get_pixel(x, 0), &BLACK);
			assert_eq!(image.get_pixel(x, 1), &blue);
			assert_eq!(image.get_pixel(x, 2), &BLACK);
		}
	}
}
