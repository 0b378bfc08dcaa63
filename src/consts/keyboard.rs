//! 扫描码、键码与修饰键（SDL_scancode.h / SDL_keycode.h）

pub const SDLK_SCANCODE_MASK: i32 = 1 << 30;

pub const fn SDL_SCANCODE_TO_KEYCODE(scancode: i32) -> i32 {
    scancode | SDLK_SCANCODE_MASK
}

constants! {
    SDL_SCANCODE_UNKNOWN: i32 = 0;
    SDL_SCANCODE_A: i32 = 4;
    SDL_SCANCODE_B: i32 = 5;
    SDL_SCANCODE_C: i32 = 6;
    SDL_SCANCODE_D: i32 = 7;
    SDL_SCANCODE_E: i32 = 8;
    SDL_SCANCODE_F: i32 = 9;
    SDL_SCANCODE_G: i32 = 10;
    SDL_SCANCODE_H: i32 = 11;
    SDL_SCANCODE_I: i32 = 12;
    SDL_SCANCODE_J: i32 = 13;
    SDL_SCANCODE_K: i32 = 14;
    SDL_SCANCODE_L: i32 = 15;
    SDL_SCANCODE_M: i32 = 16;
    SDL_SCANCODE_N: i32 = 17;
    SDL_SCANCODE_O: i32 = 18;
    SDL_SCANCODE_P: i32 = 19;
    SDL_SCANCODE_Q: i32 = 20;
    SDL_SCANCODE_R: i32 = 21;
    SDL_SCANCODE_S: i32 = 22;
    SDL_SCANCODE_T: i32 = 23;
    SDL_SCANCODE_U: i32 = 24;
    SDL_SCANCODE_V: i32 = 25;
    SDL_SCANCODE_W: i32 = 26;
    SDL_SCANCODE_X: i32 = 27;
    SDL_SCANCODE_Y: i32 = 28;
    SDL_SCANCODE_Z: i32 = 29;
    SDL_SCANCODE_1: i32 = 30;
    SDL_SCANCODE_2: i32 = 31;
    SDL_SCANCODE_3: i32 = 32;
    SDL_SCANCODE_4: i32 = 33;
    SDL_SCANCODE_5: i32 = 34;
    SDL_SCANCODE_6: i32 = 35;
    SDL_SCANCODE_7: i32 = 36;
    SDL_SCANCODE_8: i32 = 37;
    SDL_SCANCODE_9: i32 = 38;
    SDL_SCANCODE_0: i32 = 39;
    SDL_SCANCODE_RETURN: i32 = 40;
    SDL_SCANCODE_ESCAPE: i32 = 41;
    SDL_SCANCODE_BACKSPACE: i32 = 42;
    SDL_SCANCODE_TAB: i32 = 43;
    SDL_SCANCODE_SPACE: i32 = 44;
    SDL_SCANCODE_MINUS: i32 = 45;
    SDL_SCANCODE_EQUALS: i32 = 46;
    SDL_SCANCODE_LEFTBRACKET: i32 = 47;
    SDL_SCANCODE_RIGHTBRACKET: i32 = 48;
    SDL_SCANCODE_BACKSLASH: i32 = 49;
    SDL_SCANCODE_NONUSHASH: i32 = 50;
    SDL_SCANCODE_SEMICOLON: i32 = 51;
    SDL_SCANCODE_APOSTROPHE: i32 = 52;
    SDL_SCANCODE_GRAVE: i32 = 53;
    SDL_SCANCODE_COMMA: i32 = 54;
    SDL_SCANCODE_PERIOD: i32 = 55;
    SDL_SCANCODE_SLASH: i32 = 56;
    SDL_SCANCODE_CAPSLOCK: i32 = 57;
    SDL_SCANCODE_F1: i32 = 58;
    SDL_SCANCODE_F2: i32 = 59;
    SDL_SCANCODE_F3: i32 = 60;
    SDL_SCANCODE_F4: i32 = 61;
    SDL_SCANCODE_F5: i32 = 62;
    SDL_SCANCODE_F6: i32 = 63;
    SDL_SCANCODE_F7: i32 = 64;
    SDL_SCANCODE_F8: i32 = 65;
    SDL_SCANCODE_F9: i32 = 66;
    SDL_SCANCODE_F10: i32 = 67;
    SDL_SCANCODE_F11: i32 = 68;
    SDL_SCANCODE_F12: i32 = 69;
    SDL_SCANCODE_PRINTSCREEN: i32 = 70;
    SDL_SCANCODE_SCROLLLOCK: i32 = 71;
    SDL_SCANCODE_PAUSE: i32 = 72;
    SDL_SCANCODE_INSERT: i32 = 73;
    SDL_SCANCODE_HOME: i32 = 74;
    SDL_SCANCODE_PAGEUP: i32 = 75;
    SDL_SCANCODE_DELETE: i32 = 76;
    SDL_SCANCODE_END: i32 = 77;
    SDL_SCANCODE_PAGEDOWN: i32 = 78;
    SDL_SCANCODE_RIGHT: i32 = 79;
    SDL_SCANCODE_LEFT: i32 = 80;
    SDL_SCANCODE_DOWN: i32 = 81;
    SDL_SCANCODE_UP: i32 = 82;
    SDL_SCANCODE_NUMLOCKCLEAR: i32 = 83;
    SDL_SCANCODE_KP_DIVIDE: i32 = 84;
    SDL_SCANCODE_KP_MULTIPLY: i32 = 85;
    SDL_SCANCODE_KP_MINUS: i32 = 86;
    SDL_SCANCODE_KP_PLUS: i32 = 87;
    SDL_SCANCODE_KP_ENTER: i32 = 88;
    SDL_SCANCODE_KP_1: i32 = 89;
    SDL_SCANCODE_KP_2: i32 = 90;
    SDL_SCANCODE_KP_3: i32 = 91;
    SDL_SCANCODE_KP_4: i32 = 92;
    SDL_SCANCODE_KP_5: i32 = 93;
    SDL_SCANCODE_KP_6: i32 = 94;
    SDL_SCANCODE_KP_7: i32 = 95;
    SDL_SCANCODE_KP_8: i32 = 96;
    SDL_SCANCODE_KP_9: i32 = 97;
    SDL_SCANCODE_KP_0: i32 = 98;
    SDL_SCANCODE_KP_PERIOD: i32 = 99;
    SDL_SCANCODE_NONUSBACKSLASH: i32 = 100;
    SDL_SCANCODE_APPLICATION: i32 = 101;
    SDL_SCANCODE_POWER: i32 = 102;
    SDL_SCANCODE_KP_EQUALS: i32 = 103;
    SDL_SCANCODE_F13: i32 = 104;
    SDL_SCANCODE_F14: i32 = 105;
    SDL_SCANCODE_F15: i32 = 106;
    SDL_SCANCODE_F16: i32 = 107;
    SDL_SCANCODE_F17: i32 = 108;
    SDL_SCANCODE_F18: i32 = 109;
    SDL_SCANCODE_F19: i32 = 110;
    SDL_SCANCODE_F20: i32 = 111;
    SDL_SCANCODE_F21: i32 = 112;
    SDL_SCANCODE_F22: i32 = 113;
    SDL_SCANCODE_F23: i32 = 114;
    SDL_SCANCODE_F24: i32 = 115;
    SDL_SCANCODE_EXECUTE: i32 = 116;
    SDL_SCANCODE_HELP: i32 = 117;
    SDL_SCANCODE_MENU: i32 = 118;
    SDL_SCANCODE_SELECT: i32 = 119;
    SDL_SCANCODE_STOP: i32 = 120;
    SDL_SCANCODE_AGAIN: i32 = 121;
    SDL_SCANCODE_UNDO: i32 = 122;
    SDL_SCANCODE_CUT: i32 = 123;
    SDL_SCANCODE_COPY: i32 = 124;
    SDL_SCANCODE_PASTE: i32 = 125;
    SDL_SCANCODE_FIND: i32 = 126;
    SDL_SCANCODE_MUTE: i32 = 127;
    SDL_SCANCODE_VOLUMEUP: i32 = 128;
    SDL_SCANCODE_VOLUMEDOWN: i32 = 129;
    SDL_SCANCODE_KP_COMMA: i32 = 133;
    SDL_SCANCODE_KP_EQUALSAS400: i32 = 134;
    SDL_SCANCODE_INTERNATIONAL1: i32 = 135;
    SDL_SCANCODE_INTERNATIONAL2: i32 = 136;
    SDL_SCANCODE_INTERNATIONAL3: i32 = 137;
    SDL_SCANCODE_INTERNATIONAL4: i32 = 138;
    SDL_SCANCODE_INTERNATIONAL5: i32 = 139;
    SDL_SCANCODE_INTERNATIONAL6: i32 = 140;
    SDL_SCANCODE_INTERNATIONAL7: i32 = 141;
    SDL_SCANCODE_INTERNATIONAL8: i32 = 142;
    SDL_SCANCODE_INTERNATIONAL9: i32 = 143;
    SDL_SCANCODE_LANG1: i32 = 144;
    SDL_SCANCODE_LANG2: i32 = 145;
    SDL_SCANCODE_LANG3: i32 = 146;
    SDL_SCANCODE_LANG4: i32 = 147;
    SDL_SCANCODE_LANG5: i32 = 148;
    SDL_SCANCODE_LANG6: i32 = 149;
    SDL_SCANCODE_LANG7: i32 = 150;
    SDL_SCANCODE_LANG8: i32 = 151;
    SDL_SCANCODE_LANG9: i32 = 152;
    SDL_SCANCODE_ALTERASE: i32 = 153;
    SDL_SCANCODE_SYSREQ: i32 = 154;
    SDL_SCANCODE_CANCEL: i32 = 155;
    SDL_SCANCODE_CLEAR: i32 = 156;
    SDL_SCANCODE_PRIOR: i32 = 157;
    SDL_SCANCODE_RETURN2: i32 = 158;
    SDL_SCANCODE_SEPARATOR: i32 = 159;
    SDL_SCANCODE_OUT: i32 = 160;
    SDL_SCANCODE_OPER: i32 = 161;
    SDL_SCANCODE_CLEARAGAIN: i32 = 162;
    SDL_SCANCODE_CRSEL: i32 = 163;
    SDL_SCANCODE_EXSEL: i32 = 164;
    SDL_SCANCODE_KP_00: i32 = 176;
    SDL_SCANCODE_KP_000: i32 = 177;
    SDL_SCANCODE_THOUSANDSSEPARATOR: i32 = 178;
    SDL_SCANCODE_DECIMALSEPARATOR: i32 = 179;
    SDL_SCANCODE_CURRENCYUNIT: i32 = 180;
    SDL_SCANCODE_CURRENCYSUBUNIT: i32 = 181;
    SDL_SCANCODE_KP_LEFTPAREN: i32 = 182;
    SDL_SCANCODE_KP_RIGHTPAREN: i32 = 183;
    SDL_SCANCODE_KP_LEFTBRACE: i32 = 184;
    SDL_SCANCODE_KP_RIGHTBRACE: i32 = 185;
    SDL_SCANCODE_KP_TAB: i32 = 186;
    SDL_SCANCODE_KP_BACKSPACE: i32 = 187;
    SDL_SCANCODE_KP_A: i32 = 188;
    SDL_SCANCODE_KP_B: i32 = 189;
    SDL_SCANCODE_KP_C: i32 = 190;
    SDL_SCANCODE_KP_D: i32 = 191;
    SDL_SCANCODE_KP_E: i32 = 192;
    SDL_SCANCODE_KP_F: i32 = 193;
    SDL_SCANCODE_KP_XOR: i32 = 194;
    SDL_SCANCODE_KP_POWER: i32 = 195;
    SDL_SCANCODE_KP_PERCENT: i32 = 196;
    SDL_SCANCODE_KP_LESS: i32 = 197;
    SDL_SCANCODE_KP_GREATER: i32 = 198;
    SDL_SCANCODE_KP_AMPERSAND: i32 = 199;
    SDL_SCANCODE_KP_DBLAMPERSAND: i32 = 200;
    SDL_SCANCODE_KP_VERTICALBAR: i32 = 201;
    SDL_SCANCODE_KP_DBLVERTICALBAR: i32 = 202;
    SDL_SCANCODE_KP_COLON: i32 = 203;
    SDL_SCANCODE_KP_HASH: i32 = 204;
    SDL_SCANCODE_KP_SPACE: i32 = 205;
    SDL_SCANCODE_KP_AT: i32 = 206;
    SDL_SCANCODE_KP_EXCLAM: i32 = 207;
    SDL_SCANCODE_KP_MEMSTORE: i32 = 208;
    SDL_SCANCODE_KP_MEMRECALL: i32 = 209;
    SDL_SCANCODE_KP_MEMCLEAR: i32 = 210;
    SDL_SCANCODE_KP_MEMADD: i32 = 211;
    SDL_SCANCODE_KP_MEMSUBTRACT: i32 = 212;
    SDL_SCANCODE_KP_MEMMULTIPLY: i32 = 213;
    SDL_SCANCODE_KP_MEMDIVIDE: i32 = 214;
    SDL_SCANCODE_KP_PLUSMINUS: i32 = 215;
    SDL_SCANCODE_KP_CLEAR: i32 = 216;
    SDL_SCANCODE_KP_CLEARENTRY: i32 = 217;
    SDL_SCANCODE_KP_BINARY: i32 = 218;
    SDL_SCANCODE_KP_OCTAL: i32 = 219;
    SDL_SCANCODE_KP_DECIMAL: i32 = 220;
    SDL_SCANCODE_KP_HEXADECIMAL: i32 = 221;
    SDL_SCANCODE_LCTRL: i32 = 224;
    SDL_SCANCODE_LSHIFT: i32 = 225;
    SDL_SCANCODE_LALT: i32 = 226;
    SDL_SCANCODE_LGUI: i32 = 227;
    SDL_SCANCODE_RCTRL: i32 = 228;
    SDL_SCANCODE_RSHIFT: i32 = 229;
    SDL_SCANCODE_RALT: i32 = 230;
    SDL_SCANCODE_RGUI: i32 = 231;
    SDL_SCANCODE_MODE: i32 = 257;
    SDL_SCANCODE_AUDIONEXT: i32 = 258;
    SDL_SCANCODE_AUDIOPREV: i32 = 259;
    SDL_SCANCODE_AUDIOSTOP: i32 = 260;
    SDL_SCANCODE_AUDIOPLAY: i32 = 261;
    SDL_SCANCODE_AUDIOMUTE: i32 = 262;
    SDL_SCANCODE_MEDIASELECT: i32 = 263;
    SDL_SCANCODE_WWW: i32 = 264;
    SDL_SCANCODE_MAIL: i32 = 265;
    SDL_SCANCODE_CALCULATOR: i32 = 266;
    SDL_SCANCODE_COMPUTER: i32 = 267;
    SDL_SCANCODE_AC_SEARCH: i32 = 268;
    SDL_SCANCODE_AC_HOME: i32 = 269;
    SDL_SCANCODE_AC_BACK: i32 = 270;
    SDL_SCANCODE_AC_FORWARD: i32 = 271;
    SDL_SCANCODE_AC_STOP: i32 = 272;
    SDL_SCANCODE_AC_REFRESH: i32 = 273;
    SDL_SCANCODE_AC_BOOKMARKS: i32 = 274;
    SDL_SCANCODE_BRIGHTNESSDOWN: i32 = 275;
    SDL_SCANCODE_BRIGHTNESSUP: i32 = 276;
    SDL_SCANCODE_DISPLAYSWITCH: i32 = 277;
    SDL_SCANCODE_KBDILLUMTOGGLE: i32 = 278;
    SDL_SCANCODE_KBDILLUMDOWN: i32 = 279;
    SDL_SCANCODE_KBDILLUMUP: i32 = 280;
    SDL_SCANCODE_EJECT: i32 = 281;
    SDL_SCANCODE_SLEEP: i32 = 282;
    SDL_SCANCODE_APP1: i32 = 283;
    SDL_SCANCODE_APP2: i32 = 284;
    SDL_SCANCODE_AUDIOREWIND: i32 = 285;
    SDL_SCANCODE_AUDIOFASTFORWARD: i32 = 286;
    SDL_NUM_SCANCODES: i32 = 512;

    // 可打印字符键码即其 ASCII 值
    SDLK_UNKNOWN: i32 = 0;
    SDLK_RETURN: i32 = b'\r' as i32;
    SDLK_ESCAPE: i32 = 0x1B;
    SDLK_BACKSPACE: i32 = 0x08;
    SDLK_TAB: i32 = b'\t' as i32;
    SDLK_SPACE: i32 = b' ' as i32;
    SDLK_EXCLAIM: i32 = b'!' as i32;
    SDLK_QUOTEDBL: i32 = b'"' as i32;
    SDLK_HASH: i32 = b'#' as i32;
    SDLK_PERCENT: i32 = b'%' as i32;
    SDLK_DOLLAR: i32 = b'$' as i32;
    SDLK_AMPERSAND: i32 = b'&' as i32;
    SDLK_QUOTE: i32 = b'\'' as i32;
    SDLK_LEFTPAREN: i32 = b'(' as i32;
    SDLK_RIGHTPAREN: i32 = b')' as i32;
    SDLK_ASTERISK: i32 = b'*' as i32;
    SDLK_PLUS: i32 = b'+' as i32;
    SDLK_COMMA: i32 = b',' as i32;
    SDLK_MINUS: i32 = b'-' as i32;
    SDLK_PERIOD: i32 = b'.' as i32;
    SDLK_SLASH: i32 = b'/' as i32;
    SDLK_0: i32 = b'0' as i32;
    SDLK_1: i32 = b'1' as i32;
    SDLK_2: i32 = b'2' as i32;
    SDLK_3: i32 = b'3' as i32;
    SDLK_4: i32 = b'4' as i32;
    SDLK_5: i32 = b'5' as i32;
    SDLK_6: i32 = b'6' as i32;
    SDLK_7: i32 = b'7' as i32;
    SDLK_8: i32 = b'8' as i32;
    SDLK_9: i32 = b'9' as i32;
    SDLK_COLON: i32 = b':' as i32;
    SDLK_SEMICOLON: i32 = b';' as i32;
    SDLK_LESS: i32 = b'<' as i32;
    SDLK_EQUALS: i32 = b'=' as i32;
    SDLK_GREATER: i32 = b'>' as i32;
    SDLK_QUESTION: i32 = b'?' as i32;
    SDLK_AT: i32 = b'@' as i32;
    SDLK_LEFTBRACKET: i32 = b'[' as i32;
    SDLK_BACKSLASH: i32 = b'\\' as i32;
    SDLK_RIGHTBRACKET: i32 = b']' as i32;
    SDLK_CARET: i32 = b'^' as i32;
    SDLK_UNDERSCORE: i32 = b'_' as i32;
    SDLK_BACKQUOTE: i32 = b'`' as i32;
    SDLK_a: i32 = b'a' as i32;
    SDLK_b: i32 = b'b' as i32;
    SDLK_c: i32 = b'c' as i32;
    SDLK_d: i32 = b'd' as i32;
    SDLK_e: i32 = b'e' as i32;
    SDLK_f: i32 = b'f' as i32;
    SDLK_g: i32 = b'g' as i32;
    SDLK_h: i32 = b'h' as i32;
    SDLK_i: i32 = b'i' as i32;
    SDLK_j: i32 = b'j' as i32;
    SDLK_k: i32 = b'k' as i32;
    SDLK_l: i32 = b'l' as i32;
    SDLK_m: i32 = b'm' as i32;
    SDLK_n: i32 = b'n' as i32;
    SDLK_o: i32 = b'o' as i32;
    SDLK_p: i32 = b'p' as i32;
    SDLK_q: i32 = b'q' as i32;
    SDLK_r: i32 = b'r' as i32;
    SDLK_s: i32 = b's' as i32;
    SDLK_t: i32 = b't' as i32;
    SDLK_u: i32 = b'u' as i32;
    SDLK_v: i32 = b'v' as i32;
    SDLK_w: i32 = b'w' as i32;
    SDLK_x: i32 = b'x' as i32;
    SDLK_y: i32 = b'y' as i32;
    SDLK_z: i32 = b'z' as i32;
    SDLK_DELETE: i32 = 0x7F;

    // 其余键码由扫描码派生
    SDLK_CAPSLOCK: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_CAPSLOCK);
    SDLK_F1: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_F1);
    SDLK_F2: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_F2);
    SDLK_F3: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_F3);
    SDLK_F4: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_F4);
    SDLK_F5: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_F5);
    SDLK_F6: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_F6);
    SDLK_F7: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_F7);
    SDLK_F8: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_F8);
    SDLK_F9: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_F9);
    SDLK_F10: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_F10);
    SDLK_F11: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_F11);
    SDLK_F12: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_F12);
    SDLK_PRINTSCREEN: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_PRINTSCREEN);
    SDLK_SCROLLLOCK: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_SCROLLLOCK);
    SDLK_PAUSE: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_PAUSE);
    SDLK_INSERT: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_INSERT);
    SDLK_HOME: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_HOME);
    SDLK_PAGEUP: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_PAGEUP);
    SDLK_END: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_END);
    SDLK_PAGEDOWN: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_PAGEDOWN);
    SDLK_RIGHT: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_RIGHT);
    SDLK_LEFT: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_LEFT);
    SDLK_DOWN: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_DOWN);
    SDLK_UP: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_UP);
    SDLK_NUMLOCKCLEAR: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_NUMLOCKCLEAR);
    SDLK_KP_DIVIDE: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_KP_DIVIDE);
    SDLK_KP_MULTIPLY: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_KP_MULTIPLY);
    SDLK_KP_MINUS: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_KP_MINUS);
    SDLK_KP_PLUS: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_KP_PLUS);
    SDLK_KP_ENTER: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_KP_ENTER);
    SDLK_KP_1: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_KP_1);
    SDLK_KP_2: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_KP_2);
    SDLK_KP_3: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_KP_3);
    SDLK_KP_4: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_KP_4);
    SDLK_KP_5: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_KP_5);
    SDLK_KP_6: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_KP_6);
    SDLK_KP_7: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_KP_7);
    SDLK_KP_8: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_KP_8);
    SDLK_KP_9: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_KP_9);
    SDLK_KP_0: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_KP_0);
    SDLK_KP_PERIOD: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_KP_PERIOD);
    SDLK_APPLICATION: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_APPLICATION);
    SDLK_POWER: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_POWER);
    SDLK_KP_EQUALS: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_KP_EQUALS);
    SDLK_F13: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_F13);
    SDLK_F14: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_F14);
    SDLK_F15: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_F15);
    SDLK_F16: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_F16);
    SDLK_F17: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_F17);
    SDLK_F18: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_F18);
    SDLK_F19: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_F19);
    SDLK_F20: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_F20);
    SDLK_F21: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_F21);
    SDLK_F22: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_F22);
    SDLK_F23: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_F23);
    SDLK_F24: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_F24);
    SDLK_EXECUTE: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_EXECUTE);
    SDLK_HELP: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_HELP);
    SDLK_MENU: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_MENU);
    SDLK_SELECT: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_SELECT);
    SDLK_STOP: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_STOP);
    SDLK_AGAIN: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_AGAIN);
    SDLK_UNDO: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_UNDO);
    SDLK_CUT: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_CUT);
    SDLK_COPY: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_COPY);
    SDLK_PASTE: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_PASTE);
    SDLK_FIND: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_FIND);
    SDLK_MUTE: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_MUTE);
    SDLK_VOLUMEUP: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_VOLUMEUP);
    SDLK_VOLUMEDOWN: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_VOLUMEDOWN);
    SDLK_KP_COMMA: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_KP_COMMA);
    SDLK_KP_EQUALSAS400: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_KP_EQUALSAS400);
    SDLK_ALTERASE: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_ALTERASE);
    SDLK_SYSREQ: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_SYSREQ);
    SDLK_CANCEL: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_CANCEL);
    SDLK_CLEAR: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_CLEAR);
    SDLK_PRIOR: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_PRIOR);
    SDLK_RETURN2: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_RETURN2);
    SDLK_SEPARATOR: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_SEPARATOR);
    SDLK_OUT: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_OUT);
    SDLK_OPER: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_OPER);
    SDLK_CLEARAGAIN: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_CLEARAGAIN);
    SDLK_CRSEL: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_CRSEL);
    SDLK_EXSEL: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_EXSEL);
    SDLK_KP_00: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_KP_00);
    SDLK_KP_000: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_KP_000);
    SDLK_THOUSANDSSEPARATOR: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_THOUSANDSSEPARATOR);
    SDLK_DECIMALSEPARATOR: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_DECIMALSEPARATOR);
    SDLK_CURRENCYUNIT: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_CURRENCYUNIT);
    SDLK_CURRENCYSUBUNIT: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_CURRENCYSUBUNIT);
    SDLK_KP_LEFTPAREN: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_KP_LEFTPAREN);
    SDLK_KP_RIGHTPAREN: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_KP_RIGHTPAREN);
    SDLK_KP_LEFTBRACE: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_KP_LEFTBRACE);
    SDLK_KP_RIGHTBRACE: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_KP_RIGHTBRACE);
    SDLK_KP_TAB: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_KP_TAB);
    SDLK_KP_BACKSPACE: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_KP_BACKSPACE);
    SDLK_KP_A: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_KP_A);
    SDLK_KP_B: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_KP_B);
    SDLK_KP_C: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_KP_C);
    SDLK_KP_D: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_KP_D);
    SDLK_KP_E: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_KP_E);
    SDLK_KP_F: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_KP_F);
    SDLK_KP_XOR: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_KP_XOR);
    SDLK_KP_POWER: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_KP_POWER);
    SDLK_KP_PERCENT: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_KP_PERCENT);
    SDLK_KP_LESS: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_KP_LESS);
    SDLK_KP_GREATER: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_KP_GREATER);
    SDLK_KP_AMPERSAND: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_KP_AMPERSAND);
    SDLK_KP_DBLAMPERSAND: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_KP_DBLAMPERSAND);
    SDLK_KP_VERTICALBAR: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_KP_VERTICALBAR);
    SDLK_KP_DBLVERTICALBAR: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_KP_DBLVERTICALBAR);
    SDLK_KP_COLON: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_KP_COLON);
    SDLK_KP_HASH: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_KP_HASH);
    SDLK_KP_SPACE: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_KP_SPACE);
    SDLK_KP_AT: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_KP_AT);
    SDLK_KP_EXCLAM: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_KP_EXCLAM);
    SDLK_KP_MEMSTORE: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_KP_MEMSTORE);
    SDLK_KP_MEMRECALL: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_KP_MEMRECALL);
    SDLK_KP_MEMCLEAR: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_KP_MEMCLEAR);
    SDLK_KP_MEMADD: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_KP_MEMADD);
    SDLK_KP_MEMSUBTRACT: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_KP_MEMSUBTRACT);
    SDLK_KP_MEMMULTIPLY: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_KP_MEMMULTIPLY);
    SDLK_KP_MEMDIVIDE: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_KP_MEMDIVIDE);
    SDLK_KP_PLUSMINUS: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_KP_PLUSMINUS);
    SDLK_KP_CLEAR: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_KP_CLEAR);
    SDLK_KP_CLEARENTRY: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_KP_CLEARENTRY);
    SDLK_KP_BINARY: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_KP_BINARY);
    SDLK_KP_OCTAL: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_KP_OCTAL);
    SDLK_KP_DECIMAL: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_KP_DECIMAL);
    SDLK_KP_HEXADECIMAL: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_KP_HEXADECIMAL);
    SDLK_LCTRL: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_LCTRL);
    SDLK_LSHIFT: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_LSHIFT);
    SDLK_LALT: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_LALT);
    SDLK_LGUI: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_LGUI);
    SDLK_RCTRL: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_RCTRL);
    SDLK_RSHIFT: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_RSHIFT);
    SDLK_RALT: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_RALT);
    SDLK_RGUI: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_RGUI);
    SDLK_MODE: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_MODE);
    SDLK_AUDIONEXT: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_AUDIONEXT);
    SDLK_AUDIOPREV: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_AUDIOPREV);
    SDLK_AUDIOSTOP: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_AUDIOSTOP);
    SDLK_AUDIOPLAY: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_AUDIOPLAY);
    SDLK_AUDIOMUTE: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_AUDIOMUTE);
    SDLK_MEDIASELECT: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_MEDIASELECT);
    SDLK_WWW: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_WWW);
    SDLK_MAIL: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_MAIL);
    SDLK_CALCULATOR: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_CALCULATOR);
    SDLK_COMPUTER: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_COMPUTER);
    SDLK_AC_SEARCH: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_AC_SEARCH);
    SDLK_AC_HOME: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_AC_HOME);
    SDLK_AC_BACK: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_AC_BACK);
    SDLK_AC_FORWARD: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_AC_FORWARD);
    SDLK_AC_STOP: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_AC_STOP);
    SDLK_AC_REFRESH: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_AC_REFRESH);
    SDLK_AC_BOOKMARKS: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_AC_BOOKMARKS);
    SDLK_BRIGHTNESSDOWN: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_BRIGHTNESSDOWN);
    SDLK_BRIGHTNESSUP: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_BRIGHTNESSUP);
    SDLK_DISPLAYSWITCH: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_DISPLAYSWITCH);
    SDLK_KBDILLUMTOGGLE: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_KBDILLUMTOGGLE);
    SDLK_KBDILLUMDOWN: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_KBDILLUMDOWN);
    SDLK_KBDILLUMUP: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_KBDILLUMUP);
    SDLK_EJECT: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_EJECT);
    SDLK_SLEEP: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_SLEEP);
    SDLK_APP1: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_APP1);
    SDLK_APP2: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_APP2);
    SDLK_AUDIOREWIND: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_AUDIOREWIND);
    SDLK_AUDIOFASTFORWARD: i32 = SDL_SCANCODE_TO_KEYCODE(SDL_SCANCODE_AUDIOFASTFORWARD);

    KMOD_NONE: u16 = 0x0000;
    KMOD_LSHIFT: u16 = 0x0001;
    KMOD_RSHIFT: u16 = 0x0002;
    KMOD_LCTRL: u16 = 0x0040;
    KMOD_RCTRL: u16 = 0x0080;
    KMOD_LALT: u16 = 0x0100;
    KMOD_RALT: u16 = 0x0200;
    KMOD_LGUI: u16 = 0x0400;
    KMOD_RGUI: u16 = 0x0800;
    KMOD_NUM: u16 = 0x1000;
    KMOD_CAPS: u16 = 0x2000;
    KMOD_MODE: u16 = 0x4000;
    KMOD_SCROLL: u16 = 0x8000;
    KMOD_CTRL: u16 = KMOD_LCTRL | KMOD_RCTRL;
    KMOD_SHIFT: u16 = KMOD_LSHIFT | KMOD_RSHIFT;
    KMOD_ALT: u16 = KMOD_LALT | KMOD_RALT;
    KMOD_GUI: u16 = KMOD_LGUI | KMOD_RGUI;
    KMOD_RESERVED: u16 = KMOD_SCROLL;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keycode_derivation() {
        assert_eq!(SDLK_a, 97);
        assert_eq!(SDLK_RETURN, 13);
        assert_eq!(SDLK_F1, 0x4000_003A);
        assert_eq!(SDLK_AUDIOFASTFORWARD, 0x4000_011E);
        assert_eq!(KMOD_CTRL, 0x00C0);
        assert_eq!(KMOD_GUI, 0x0C00);
    }
}
