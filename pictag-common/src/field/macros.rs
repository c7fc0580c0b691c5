macro_rules! make_tags {
    ($($(#[$($attrss:tt)*])*($id:ident, $section:expr)),*$(,)?) => {
        $(
            $(#[$($attrss)*])*
            #[derive(Copy, Clone, Debug)]
            pub struct $id;

            impl $crate::exif::Field for $id {
                const NAME: &'static str = stringify!($id);
                const SECTION: Section = $section;
            }
        )*
    };
}

pub(crate) use make_tags;
