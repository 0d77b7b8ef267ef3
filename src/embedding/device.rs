use candle_core::Device;

#[cfg(any(feature = "metal", feature = "cuda"))]
use tracing::{info, warn};

#[cfg(not(any(feature = "metal", feature = "cuda")))]
use tracing::debug;

use super::error::EmbeddingError;

/// Selects the compute device based on enabled features (falls back to CPU).
pub fn select_device() -> Result<Device, EmbeddingError> {
    #[cfg(feature = "metal")]
    match Device::new_metal(0) {
        Ok(device) => {
            info!("using Metal for embedding inference");
            return Ok(device);
        }
        Err(e) => warn!(error = %e, "Metal device unavailable, falling back"),
    }

    #[cfg(feature = "cuda")]
    match Device::new_cuda(0) {
        Ok(device) => {
            info!("using CUDA for embedding inference");
            return Ok(device);
        }
        Err(e) => warn!(error = %e, "CUDA device unavailable, falling back"),
    }

    #[cfg(not(any(feature = "metal", feature = "cuda")))]
    debug!("no GPU backend compiled, using CPU");

    Ok(Device::Cpu)
}
