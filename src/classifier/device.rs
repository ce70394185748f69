use candle_core::Device;
use tracing::warn;

#[cfg(any(feature = "metal", feature = "cuda"))]
use tracing::info;

use super::error::ClassifierError;

/// Picks the compute device once at startup.
///
/// Order: Metal, then CUDA (each only when its cargo feature is compiled in), then CPU.
/// GPU initialization failures are logged and fall through; CPU is always available.
pub fn select_device() -> Result<Device, ClassifierError> {
    let mut failures: Vec<String> = Vec::new();

    if let Some(device) = try_metal(&mut failures) {
        return Ok(device);
    }
    if let Some(device) = try_cuda(&mut failures) {
        return Ok(device);
    }

    let reason = if !cfg!(any(feature = "metal", feature = "cuda")) {
        "no GPU backend compiled".to_string()
    } else {
        failures.join("; ")
    };

    warn!(reason = %reason, "Falling back to CPU device");
    Ok(Device::Cpu)
}

/// Short label for logs and health output.
pub fn device_label(device: &Device) -> &'static str {
    match device {
        Device::Cpu => "cpu",
        Device::Cuda(_) => "cuda",
        Device::Metal(_) => "metal",
    }
}

#[cfg(feature = "metal")]
fn try_metal(failures: &mut Vec<String>) -> Option<Device> {
    match Device::new_metal(0) {
        Ok(device) => {
            info!("Using Metal GPU acceleration");
            Some(device)
        }
        Err(e) => {
            warn!(error = %e, "Metal device unavailable");
            failures.push(format!("metal failed: {e}"));
            None
        }
    }
}

#[cfg(not(feature = "metal"))]
fn try_metal(_failures: &mut Vec<String>) -> Option<Device> {
    None
}

#[cfg(feature = "cuda")]
fn try_cuda(failures: &mut Vec<String>) -> Option<Device> {
    match Device::new_cuda(0) {
        Ok(device) => {
            info!("Using CUDA GPU acceleration");
            Some(device)
        }
        Err(e) => {
            warn!(error = %e, "CUDA device unavailable");
            failures.push(format!("cuda failed: {e}"));
            None
        }
    }
}

#[cfg(not(feature = "cuda"))]
fn try_cuda(_failures: &mut Vec<String>) -> Option<Device> {
    None
}

#[cfg(all(test, not(any(feature = "metal", feature = "cuda"))))]
mod tests {
    use super::*;

    #[test]
    fn test_select_device_falls_back_to_cpu() {
        let device = select_device().unwrap();

        assert!(device.is_cpu());
        assert_eq!(device_label(&device), "cpu");
    }
}
