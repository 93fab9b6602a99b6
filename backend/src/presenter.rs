use crate::compositor::RenderTarget;
use log::info;
use std::time::Duration;

/// Flips the composed back buffer to the window.
pub fn present<R: RenderTarget + ?Sized>(target: &mut R) {
    target.present();
    info!("frame presented");
}

/// Blocks the calling thread for `duration`. No events are pumped while
/// waiting, so a close request is only seen after the hold ends.
pub fn hold(duration: Duration) {
    info!("holding frame for {} ms", duration.as_millis());
    ::std::thread::sleep(duration);
}

pub fn present_and_hold<R: RenderTarget + ?Sized>(target: &mut R, duration: Duration) {
    present(target);
    hold(duration);
}
