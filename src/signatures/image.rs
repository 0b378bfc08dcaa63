//! SDL2_image 函数签名

use crate::signatures::NativeType::*;

signatures! {
    pub static FUNCTIONS = {
        IMG_Linked_Version() -> Ptr;
        IMG_Init(I32) -> I32;
        IMG_Quit() -> Void;
        IMG_Load(CStr) -> Ptr;
        IMG_Load_RW(Ptr, I32) -> Ptr;
        IMG_LoadTyped_RW(Ptr, I32, CStr) -> Ptr;
        IMG_LoadTexture(Ptr, CStr) -> Ptr;
        IMG_LoadTexture_RW(Ptr, Ptr, I32) -> Ptr;
        IMG_LoadTextureTyped_RW(Ptr, Ptr, I32, CStr) -> Ptr;
        IMG_isICO(Ptr) -> I32;
        IMG_isCUR(Ptr) -> I32;
        IMG_isBMP(Ptr) -> I32;
        IMG_isGIF(Ptr) -> I32;
        IMG_isJPG(Ptr) -> I32;
        IMG_isLBM(Ptr) -> I32;
        IMG_isPCX(Ptr) -> I32;
        IMG_isPNG(Ptr) -> I32;
        IMG_isPNM(Ptr) -> I32;
        IMG_isSVG(Ptr) -> I32;
        IMG_isTIF(Ptr) -> I32;
        IMG_isXCF(Ptr) -> I32;
        IMG_isXPM(Ptr) -> I32;
        IMG_isXV(Ptr) -> I32;
        IMG_isWEBP(Ptr) -> I32;
        IMG_LoadICO_RW(Ptr) -> Ptr;
        IMG_LoadCUR_RW(Ptr) -> Ptr;
        IMG_LoadBMP_RW(Ptr) -> Ptr;
        IMG_LoadGIF_RW(Ptr) -> Ptr;
        IMG_LoadJPG_RW(Ptr) -> Ptr;
        IMG_LoadLBM_RW(Ptr) -> Ptr;
        IMG_LoadPCX_RW(Ptr) -> Ptr;
        IMG_LoadPNG_RW(Ptr) -> Ptr;
        IMG_LoadPNM_RW(Ptr) -> Ptr;
        IMG_LoadSVG_RW(Ptr) -> Ptr;
        IMG_LoadTGA_RW(Ptr) -> Ptr;
        IMG_LoadTIF_RW(Ptr) -> Ptr;
        IMG_LoadXCF_RW(Ptr) -> Ptr;
        IMG_LoadXPM_RW(Ptr) -> Ptr;
        IMG_LoadXV_RW(Ptr) -> Ptr;
        IMG_LoadWEBP_RW(Ptr) -> Ptr;
        IMG_ReadXPMFromArray(Ptr) -> Ptr;
        IMG_SavePNG(Ptr, CStr) -> I32;
        IMG_SavePNG_RW(Ptr, Ptr, I32) -> I32;
        IMG_SaveJPG(Ptr, CStr, I32) -> I32;
        IMG_SaveJPG_RW(Ptr, Ptr, I32, I32) -> I32;
    }
}
