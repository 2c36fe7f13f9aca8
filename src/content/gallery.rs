use crate::models::GalleryImage;

/// Files under `/images`, in display order.
pub const GALLERY_FILES: [&str; 26] = [
    "1jpg",
    "1jpg (Copy)",
    "IMG20251023130839.jpg",
    "IMG20251023130941.jpg",
    "IMG20251030163000.jpg",
    "IMG20251030163245.jpg",
    "IMG20251030163331.jpg",
    "IMG20251030163623.jpg",
    "IMG20251030163644.jpg",
    "IMG20251030163657.jpg",
    "IMG20251030163708.jpg",
    "IMG20251030163731.jpg",
    "IMG20251030163820.jpg",
    "IMG20251030163832.jpg",
    "IMG20251030171429.jpg",
    "IMG20251212144010.jpg",
    "IMG20251212144126.jpg",
    "IMG20251212144545.jpg",
    "IMG20251212145708.jpg",
    "IMG-20260129-WA0002.jpg",
    "IMG-20260129-WA0003.jpg",
    "IMG-20260129-WA0005.jpg",
    "IMG-20260129-WA0006.jpg",
    "IMG-20260129-WA0007.jpg",
    "IMG-20260129-WA0008.jpg",
    "IMG-20260129-WA0009.jpg",
];

pub fn gallery_images() -> Vec<GalleryImage> {
    GALLERY_FILES
        .iter()
        .enumerate()
        .map(|(i, file)| GalleryImage::from_file(file, i))
        .collect()
}
