use crate::config::PreprocessConfig;
use crate::image::Image;
use image::imageops::{self, FilterType};
use ndarray::Array4;

pub struct ImagePreprocessor;

impl ImagePreprocessor {
    /// 将图像转换为 NCHW 格式的 [1, 3, H, W] 输入张量
    pub fn to_tensor(image: &Image, config: &PreprocessConfig) -> Array4<f32> {
        let (target_w, target_h) = (config.input_width, config.input_height);

        let resized;
        let rgb = if image.width() == target_w && image.height() == target_h {
            image.pixels()
        } else {
            resized = imageops::resize(image.pixels(), target_w, target_h, FilterType::Triangle);
            &resized
        };

        Array4::from_shape_fn(
            (1, 3, target_h as usize, target_w as usize),
            |(_, c, y, x)| {
                let value = rgb.get_pixel(x as u32, y as u32)[c] as f32 / 255.0;
                (value - config.mean[c]) / config.std[c]
            },
        )
    }
}
