//! SDL2_mixer 结构体

native_struct! {
    pub struct Mix_Chunk {
        pub allocated: i32,
        pub abuf: *mut u8,
        pub alen: u32,
        /// 0..=128
        pub volume: u8,
    }
}
