//! SDL2_ttf 函数签名
//!
//! 渲染函数按值接收 `SDL_Color`。

use crate::signatures::NativeType::*;

const COLOR: crate::signatures::NativeType = Aggregate("SDL_Color");

signatures! {
    pub static FUNCTIONS = {
        TTF_Linked_Version() -> Ptr;
        TTF_ByteSwappedUNICODE(I32) -> Void;
        TTF_Init() -> I32;
        TTF_Quit() -> Void;
        TTF_WasInit() -> I32;
        TTF_OpenFont(CStr, I32) -> Ptr;
        TTF_OpenFontIndex(CStr, I32, Long) -> Ptr;
        TTF_OpenFontRW(Ptr, I32, I32) -> Ptr;
        TTF_OpenFontIndexRW(Ptr, I32, I32, Long) -> Ptr;
        TTF_CloseFont(Ptr) -> Void;
        TTF_GetFontStyle(Ptr) -> I32;
        TTF_SetFontStyle(Ptr, I32) -> Void;
        TTF_GetFontOutline(Ptr) -> I32;
        TTF_SetFontOutline(Ptr, I32) -> Void;
        TTF_GetFontHinting(Ptr) -> I32;
        TTF_SetFontHinting(Ptr, I32) -> Void;
        TTF_FontHeight(Ptr) -> I32;
        TTF_FontAscent(Ptr) -> I32;
        TTF_FontDescent(Ptr) -> I32;
        TTF_FontLineSkip(Ptr) -> I32;
        TTF_GetFontKerning(Ptr) -> I32;
        TTF_SetFontKerning(Ptr, I32) -> Void;
        TTF_FontFaces(Ptr) -> Long;
        TTF_FontFaceIsFixedWidth(Ptr) -> I32;
        TTF_FontFaceFamilyName(Ptr) -> CStr;
        TTF_FontFaceStyleName(Ptr) -> CStr;
        TTF_GlyphIsProvided(Ptr, U16) -> I32;
        TTF_GlyphMetrics(Ptr, U16, Ptr, Ptr, Ptr, Ptr, Ptr) -> I32;
        TTF_SizeText(Ptr, CStr, Ptr, Ptr) -> I32;
        TTF_SizeUTF8(Ptr, CStr, Ptr, Ptr) -> I32;
        TTF_SizeUNICODE(Ptr, Ptr, Ptr, Ptr) -> I32;
        TTF_GetFontKerningSize(Ptr, I32, I32) -> I32;
        TTF_GetFontKerningSizeGlyphs(Ptr, U16, U16) -> I32;
        TTF_RenderText_Solid(Ptr, CStr, COLOR) -> Ptr;
        TTF_RenderUTF8_Solid(Ptr, CStr, COLOR) -> Ptr;
        TTF_RenderUNICODE_Solid(Ptr, Ptr, COLOR) -> Ptr;
        TTF_RenderGlyph_Solid(Ptr, U16, COLOR) -> Ptr;
        TTF_RenderText_Shaded(Ptr, CStr, COLOR, COLOR) -> Ptr;
        TTF_RenderUTF8_Shaded(Ptr, CStr, COLOR, COLOR) -> Ptr;
        TTF_RenderUNICODE_Shaded(Ptr, Ptr, COLOR, COLOR) -> Ptr;
        TTF_RenderGlyph_Shaded(Ptr, U16, COLOR, COLOR) -> Ptr;
        TTF_RenderText_Blended(Ptr, CStr, COLOR) -> Ptr;
        TTF_RenderUTF8_Blended(Ptr, CStr, COLOR) -> Ptr;
        TTF_RenderUNICODE_Blended(Ptr, Ptr, COLOR) -> Ptr;
        TTF_RenderText_Blended_Wrapped(Ptr, CStr, COLOR, U32) -> Ptr;
        TTF_RenderUTF8_Blended_Wrapped(Ptr, CStr, COLOR, U32) -> Ptr;
        TTF_RenderUNICODE_Blended_Wrapped(Ptr, Ptr, COLOR, U32) -> Ptr;
        TTF_RenderGlyph_Blended(Ptr, U16, COLOR) -> Ptr;
    }
}
