use crate::domain::ImageRef;

use super::error::ServiceError;
use super::{ImagePicker, PickedImage};

/// Open the picker; `None` when the user cancels.
pub async fn pick_image(picker: &dyn ImagePicker) -> Result<Option<ImageRef>, ServiceError> {
    match picker.pick_image().await {
        PickedImage::Picked(data) => Ok(Some(ImageRef::from_base64(&data)?)),
        PickedImage::Cancelled => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::memory::ScriptedImagePicker;

    #[tokio::test]
    async fn picked_image_becomes_data_uri() {
        let picker = ScriptedImagePicker::new([PickedImage::Picked("aGVsbG8=".to_string())]);
        let image = pick_image(&picker).await.unwrap().unwrap();
        assert!(image.uri.starts_with("data:image/jpeg;base64,"));
    }

    #[tokio::test]
    async fn cancel_is_not_an_error() {
        let picker = ScriptedImagePicker::default();
        assert!(pick_image(&picker).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn corrupt_payload_is_rejected() {
        let picker = ScriptedImagePicker::new([PickedImage::Picked("%%%".to_string())]);
        assert!(matches!(
            pick_image(&picker).await,
            Err(ServiceError::Image(_))
        ));
    }
}
