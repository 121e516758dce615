//! Background image handles acquired from the host.

use log::info;

/// Packaged background assets.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BackgroundImage {
    Primary,
    Secondary,
}

/// Host resource loader. Handles are opaque to the face.
pub trait ImageLoader {
    type Handle;
    type Error;

    fn load(&mut self, image: BackgroundImage) -> Result<Self::Handle, Self::Error>;
    fn release(&mut self, handle: Self::Handle);
}

/// Both background handles, held from startup until teardown.
#[derive(Debug)]
pub struct Backgrounds<H> {
    primary: H,
    secondary: H,
}

impl<H> Backgrounds<H> {
    /// Acquires both images. If the second load fails the first handle is
    /// released before the error is returned.
    pub fn load<L>(loader: &mut L) -> Result<Self, L::Error>
    where
        L: ImageLoader<Handle = H>,
    {
        let primary = loader.load(BackgroundImage::Primary)?;
        let secondary = match loader.load(BackgroundImage::Secondary) {
            Ok(handle) => handle,
            Err(err) => {
                loader.release(primary);
                return Err(err);
            }
        };
        info!("backgrounds: both images acquired");

        Ok(Self { primary, secondary })
    }

    pub fn get(&self, image: BackgroundImage) -> &H {
        match image {
            BackgroundImage::Primary => &self.primary,
            BackgroundImage::Secondary => &self.secondary,
        }
    }

    /// Releases both handles; consuming `self` makes a second release
    /// impossible.
    pub fn release<L>(self, loader: &mut L)
    where
        L: ImageLoader<Handle = H>,
    {
        loader.release(self.primary);
        loader.release(self.secondary);
        info!("backgrounds: both images released");
    }
}
