use crate::utils::error::ClassifyError;
use crate::Result;
use image::{DynamicImage, GenericImageView, ImageFormat, RgbImage};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// 解码后的RGB图像，仅在单次分类请求内存在
#[derive(Debug, Clone)]
pub struct Image {
    name: String,
    pixels: RgbImage,
}

impl Image {
    pub fn new(name: impl Into<String>, pixels: RgbImage) -> Self {
        Self {
            name: name.into(),
            pixels,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn pixels(&self) -> &RgbImage {
        &self.pixels
    }
}

pub struct ImageLoader {
    images_dir: PathBuf,
}

impl ImageLoader {
    pub fn new(images_dir: impl Into<PathBuf>) -> Self {
        Self {
            images_dir: images_dir.into(),
        }
    }

    /// 按资源名从图像目录加载并解码图像
    pub fn load(&self, name: &str) -> Result<Image> {
        let path = self.images_dir.join(name);
        tracing::debug!("Image path: {}", path.display());

        if !path.is_file() {
            return Err(ClassifyError::NotFound {
                name: name.to_string(),
                path,
            });
        }

        let bytes = std::fs::read(&path).map_err(|e| Self::read_failure(name, &path, e))?;

        Self::from_bytes(name, &bytes)
    }

    /// 文件存在但读取失败时视为无法解码
    fn read_failure(name: &str, path: &Path, err: std::io::Error) -> ClassifyError {
        match err.kind() {
            ErrorKind::NotFound => ClassifyError::NotFound {
                name: name.to_string(),
                path: path.to_path_buf(),
            },
            _ => ClassifyError::decode(name, format!("failed to read {}: {}", path.display(), err)),
        }
    }

    /// 从内存字节解码图像
    pub fn from_bytes(name: &str, bytes: &[u8]) -> Result<Image> {
        let format = Self::detect_format(bytes)
            .ok_or_else(|| ClassifyError::decode(name, "unrecognized image format"))?;

        if !Self::is_supported_format(format) {
            return Err(ClassifyError::decode(
                name,
                format!("unsupported format {:?}", format),
            ));
        }

        let image = image::load_from_memory_with_format(bytes, format)
            .map_err(|e| ClassifyError::decode(name, e))?;

        Self::validate_dimensions(name, &image)?;

        Ok(Image::new(name, image.to_rgb8()))
    }

    /// 检测图像格式
    pub fn detect_format(bytes: &[u8]) -> Option<ImageFormat> {
        image::guess_format(bytes).ok()
    }

    /// 验证图像格式是否支持
    pub fn is_supported_format(format: ImageFormat) -> bool {
        matches!(
            format,
            ImageFormat::Png
                | ImageFormat::Jpeg
                | ImageFormat::Bmp
                | ImageFormat::Tiff
                | ImageFormat::WebP
                | ImageFormat::Gif
        )
    }

    fn validate_dimensions(name: &str, image: &DynamicImage) -> Result<()> {
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Err(ClassifyError::decode(
                name,
                format!("empty raster {}x{}", width, height),
            ));
        }
        Ok(())
    }
}
