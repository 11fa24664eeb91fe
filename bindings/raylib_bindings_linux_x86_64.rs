/* Generated bindings for raylib 5.5 (raylib + rlgl + raygui + utils_log).
 * Produced from raylib_parser API JSON; layout mirrors bindgen --rustified-enum output. */

pub const PI: f64 = 3.141592653589793;
pub const DEG2RAD: f64 = PI / 180.0;
pub const RAD2DEG: f64 = 180.0 / PI;
pub const MAX_MATERIAL_MAPS: u32 = 12;
pub const MAX_SHADER_LOCATIONS: u32 = 32;
pub const RAYLIB_VERSION_MAJOR: u32 = 5;
pub const RAYLIB_VERSION_MINOR: u32 = 5;
pub const RAYLIB_VERSION_PATCH: u32 = 0;
pub const RAYLIB_VERSION: &[u8; 4usize] = b"5.5\0";

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct __va_list_tag {
    pub gp_offset: std::os::raw::c_uint,
    pub fp_offset: std::os::raw::c_uint,
    pub overflow_arg_area: *mut std::os::raw::c_void,
    pub reg_save_area: *mut std::os::raw::c_void,
}
pub type __builtin_va_list = [__va_list_tag; 1usize];
pub type va_list = __builtin_va_list;

#[repr(u32)]
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum ConfigFlags {
    FLAG_VSYNC_HINT = 64,
    FLAG_FULLSCREEN_MODE = 2,
    FLAG_WINDOW_RESIZABLE = 4,
    FLAG_WINDOW_UNDECORATED = 8,
    FLAG_WINDOW_HIDDEN = 128,
    FLAG_WINDOW_MINIMIZED = 512,
    FLAG_WINDOW_MAXIMIZED = 1024,
    FLAG_WINDOW_UNFOCUSED = 2048,
    FLAG_WINDOW_TOPMOST = 4096,
    FLAG_WINDOW_ALWAYS_RUN = 256,
    FLAG_WINDOW_TRANSPARENT = 16,
    FLAG_WINDOW_HIGHDPI = 8192,
    FLAG_WINDOW_MOUSE_PASSTHROUGH = 16384,
    FLAG_BORDERLESS_WINDOWED_MODE = 32768,
    FLAG_MSAA_4X_HINT = 32,
    FLAG_INTERLACED_HINT = 65536,
}

#[repr(u32)]
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum TraceLogLevel {
    LOG_ALL = 0,
    LOG_TRACE = 1,
    LOG_DEBUG = 2,
    LOG_INFO = 3,
    LOG_WARNING = 4,
    LOG_ERROR = 5,
    LOG_FATAL = 6,
    LOG_NONE = 7,
}

#[repr(u32)]
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum KeyboardKey {
    KEY_NULL = 0,
    KEY_APOSTROPHE = 39,
    KEY_COMMA = 44,
    KEY_MINUS = 45,
    KEY_PERIOD = 46,
    KEY_SLASH = 47,
    KEY_ZERO = 48,
    KEY_ONE = 49,
    KEY_TWO = 50,
    KEY_THREE = 51,
    KEY_FOUR = 52,
    KEY_FIVE = 53,
    KEY_SIX = 54,
    KEY_SEVEN = 55,
    KEY_EIGHT = 56,
    KEY_NINE = 57,
    KEY_SEMICOLON = 59,
    KEY_EQUAL = 61,
    KEY_A = 65,
    KEY_B = 66,
    KEY_C = 67,
    KEY_D = 68,
    KEY_E = 69,
    KEY_F = 70,
    KEY_G = 71,
    KEY_H = 72,
    KEY_I = 73,
    KEY_J = 74,
    KEY_K = 75,
    KEY_L = 76,
    KEY_M = 77,
    KEY_N = 78,
    KEY_O = 79,
    KEY_P = 80,
    KEY_Q = 81,
    KEY_R = 82,
    KEY_S = 83,
    KEY_T = 84,
    KEY_U = 85,
    KEY_V = 86,
    KEY_W = 87,
    KEY_X = 88,
    KEY_Y = 89,
    KEY_Z = 90,
    KEY_LEFT_BRACKET = 91,
    KEY_BACKSLASH = 92,
    KEY_RIGHT_BRACKET = 93,
    KEY_GRAVE = 96,
    KEY_SPACE = 32,
    KEY_ESCAPE = 256,
    KEY_ENTER = 257,
    KEY_TAB = 258,
    KEY_BACKSPACE = 259,
    KEY_INSERT = 260,
    KEY_DELETE = 261,
    KEY_RIGHT = 262,
    KEY_LEFT = 263,
    KEY_DOWN = 264,
    KEY_UP = 265,
    KEY_PAGE_UP = 266,
    KEY_PAGE_DOWN = 267,
    KEY_HOME = 268,
    KEY_END = 269,
    KEY_CAPS_LOCK = 280,
    KEY_SCROLL_LOCK = 281,
    KEY_NUM_LOCK = 282,
    KEY_PRINT_SCREEN = 283,
    KEY_PAUSE = 284,
    KEY_F1 = 290,
    KEY_F2 = 291,
    KEY_F3 = 292,
    KEY_F4 = 293,
    KEY_F5 = 294,
    KEY_F6 = 295,
    KEY_F7 = 296,
    KEY_F8 = 297,
    KEY_F9 = 298,
    KEY_F10 = 299,
    KEY_F11 = 300,
    KEY_F12 = 301,
    KEY_LEFT_SHIFT = 340,
    KEY_LEFT_CONTROL = 341,
    KEY_LEFT_ALT = 342,
    KEY_LEFT_SUPER = 343,
    KEY_RIGHT_SHIFT = 344,
    KEY_RIGHT_CONTROL = 345,
    KEY_RIGHT_ALT = 346,
    KEY_RIGHT_SUPER = 347,
    KEY_KB_MENU = 348,
    KEY_KP_0 = 320,
    KEY_KP_1 = 321,
    KEY_KP_2 = 322,
    KEY_KP_3 = 323,
    KEY_KP_4 = 324,
    KEY_KP_5 = 325,
    KEY_KP_6 = 326,
    KEY_KP_7 = 327,
    KEY_KP_8 = 328,
    KEY_KP_9 = 329,
    KEY_KP_DECIMAL = 330,
    KEY_KP_DIVIDE = 331,
    KEY_KP_MULTIPLY = 332,
    KEY_KP_SUBTRACT = 333,
    KEY_KP_ADD = 334,
    KEY_KP_ENTER = 335,
    KEY_KP_EQUAL = 336,
    KEY_BACK = 4,
    KEY_MENU = 5,
    KEY_VOLUME_UP = 24,
    KEY_VOLUME_DOWN = 25,
}

#[repr(u32)]
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum MouseButton {
    MOUSE_BUTTON_LEFT = 0,
    MOUSE_BUTTON_RIGHT = 1,
    MOUSE_BUTTON_MIDDLE = 2,
    MOUSE_BUTTON_SIDE = 3,
    MOUSE_BUTTON_EXTRA = 4,
    MOUSE_BUTTON_FORWARD = 5,
    MOUSE_BUTTON_BACK = 6,
}

#[repr(u32)]
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum MouseCursor {
    MOUSE_CURSOR_DEFAULT = 0,
    MOUSE_CURSOR_ARROW = 1,
    MOUSE_CURSOR_IBEAM = 2,
    MOUSE_CURSOR_CROSSHAIR = 3,
    MOUSE_CURSOR_POINTING_HAND = 4,
    MOUSE_CURSOR_RESIZE_EW = 5,
    MOUSE_CURSOR_RESIZE_NS = 6,
    MOUSE_CURSOR_RESIZE_NWSE = 7,
    MOUSE_CURSOR_RESIZE_NESW = 8,
    MOUSE_CURSOR_RESIZE_ALL = 9,
    MOUSE_CURSOR_NOT_ALLOWED = 10,
}

#[repr(u32)]
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum GamepadButton {
    GAMEPAD_BUTTON_UNKNOWN = 0,
    GAMEPAD_BUTTON_LEFT_FACE_UP = 1,
    GAMEPAD_BUTTON_LEFT_FACE_RIGHT = 2,
    GAMEPAD_BUTTON_LEFT_FACE_DOWN = 3,
    GAMEPAD_BUTTON_LEFT_FACE_LEFT = 4,
    GAMEPAD_BUTTON_RIGHT_FACE_UP = 5,
    GAMEPAD_BUTTON_RIGHT_FACE_RIGHT = 6,
    GAMEPAD_BUTTON_RIGHT_FACE_DOWN = 7,
    GAMEPAD_BUTTON_RIGHT_FACE_LEFT = 8,
    GAMEPAD_BUTTON_LEFT_TRIGGER_1 = 9,
    GAMEPAD_BUTTON_LEFT_TRIGGER_2 = 10,
    GAMEPAD_BUTTON_RIGHT_TRIGGER_1 = 11,
    GAMEPAD_BUTTON_RIGHT_TRIGGER_2 = 12,
    GAMEPAD_BUTTON_MIDDLE_LEFT = 13,
    GAMEPAD_BUTTON_MIDDLE = 14,
    GAMEPAD_BUTTON_MIDDLE_RIGHT = 15,
    GAMEPAD_BUTTON_LEFT_THUMB = 16,
    GAMEPAD_BUTTON_RIGHT_THUMB = 17,
}

#[repr(u32)]
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum GamepadAxis {
    GAMEPAD_AXIS_LEFT_X = 0,
    GAMEPAD_AXIS_LEFT_Y = 1,
    GAMEPAD_AXIS_RIGHT_X = 2,
    GAMEPAD_AXIS_RIGHT_Y = 3,
    GAMEPAD_AXIS_LEFT_TRIGGER = 4,
    GAMEPAD_AXIS_RIGHT_TRIGGER = 5,
}

#[repr(u32)]
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum MaterialMapIndex {
    MATERIAL_MAP_ALBEDO = 0,
    MATERIAL_MAP_METALNESS = 1,
    MATERIAL_MAP_NORMAL = 2,
    MATERIAL_MAP_ROUGHNESS = 3,
    MATERIAL_MAP_OCCLUSION = 4,
    MATERIAL_MAP_EMISSION = 5,
    MATERIAL_MAP_HEIGHT = 6,
    MATERIAL_MAP_CUBEMAP = 7,
    MATERIAL_MAP_IRRADIANCE = 8,
    MATERIAL_MAP_PREFILTER = 9,
    MATERIAL_MAP_BRDF = 10,
}

#[repr(u32)]
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum ShaderLocationIndex {
    SHADER_LOC_VERTEX_POSITION = 0,
    SHADER_LOC_VERTEX_TEXCOORD01 = 1,
    SHADER_LOC_VERTEX_TEXCOORD02 = 2,
    SHADER_LOC_VERTEX_NORMAL = 3,
    SHADER_LOC_VERTEX_TANGENT = 4,
    SHADER_LOC_VERTEX_COLOR = 5,
    SHADER_LOC_MATRIX_MVP = 6,
    SHADER_LOC_MATRIX_VIEW = 7,
    SHADER_LOC_MATRIX_PROJECTION = 8,
    SHADER_LOC_MATRIX_MODEL = 9,
    SHADER_LOC_MATRIX_NORMAL = 10,
    SHADER_LOC_VECTOR_VIEW = 11,
    SHADER_LOC_COLOR_DIFFUSE = 12,
    SHADER_LOC_COLOR_SPECULAR = 13,
    SHADER_LOC_COLOR_AMBIENT = 14,
    SHADER_LOC_MAP_ALBEDO = 15,
    SHADER_LOC_MAP_METALNESS = 16,
    SHADER_LOC_MAP_NORMAL = 17,
    SHADER_LOC_MAP_ROUGHNESS = 18,
    SHADER_LOC_MAP_OCCLUSION = 19,
    SHADER_LOC_MAP_EMISSION = 20,
    SHADER_LOC_MAP_HEIGHT = 21,
    SHADER_LOC_MAP_CUBEMAP = 22,
    SHADER_LOC_MAP_IRRADIANCE = 23,
    SHADER_LOC_MAP_PREFILTER = 24,
    SHADER_LOC_MAP_BRDF = 25,
    SHADER_LOC_VERTEX_BONEIDS = 26,
    SHADER_LOC_VERTEX_BONEWEIGHTS = 27,
    SHADER_LOC_BONE_MATRICES = 28,
}

#[repr(u32)]
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum ShaderUniformDataType {
    SHADER_UNIFORM_FLOAT = 0,
    SHADER_UNIFORM_VEC2 = 1,
    SHADER_UNIFORM_VEC3 = 2,
    SHADER_UNIFORM_VEC4 = 3,
    SHADER_UNIFORM_INT = 4,
    SHADER_UNIFORM_IVEC2 = 5,
    SHADER_UNIFORM_IVEC3 = 6,
    SHADER_UNIFORM_IVEC4 = 7,
    SHADER_UNIFORM_SAMPLER2D = 8,
}

#[repr(u32)]
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum ShaderAttributeDataType {
    SHADER_ATTRIB_FLOAT = 0,
    SHADER_ATTRIB_VEC2 = 1,
    SHADER_ATTRIB_VEC3 = 2,
    SHADER_ATTRIB_VEC4 = 3,
}

#[repr(u32)]
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum PixelFormat {
    PIXELFORMAT_UNCOMPRESSED_GRAYSCALE = 1,
    PIXELFORMAT_UNCOMPRESSED_GRAY_ALPHA = 2,
    PIXELFORMAT_UNCOMPRESSED_R5G6B5 = 3,
    PIXELFORMAT_UNCOMPRESSED_R8G8B8 = 4,
    PIXELFORMAT_UNCOMPRESSED_R5G5B5A1 = 5,
    PIXELFORMAT_UNCOMPRESSED_R4G4B4A4 = 6,
    PIXELFORMAT_UNCOMPRESSED_R8G8B8A8 = 7,
    PIXELFORMAT_UNCOMPRESSED_R32 = 8,
    PIXELFORMAT_UNCOMPRESSED_R32G32B32 = 9,
    PIXELFORMAT_UNCOMPRESSED_R32G32B32A32 = 10,
    PIXELFORMAT_UNCOMPRESSED_R16 = 11,
    PIXELFORMAT_UNCOMPRESSED_R16G16B16 = 12,
    PIXELFORMAT_UNCOMPRESSED_R16G16B16A16 = 13,
    PIXELFORMAT_COMPRESSED_DXT1_RGB = 14,
    PIXELFORMAT_COMPRESSED_DXT1_RGBA = 15,
    PIXELFORMAT_COMPRESSED_DXT3_RGBA = 16,
    PIXELFORMAT_COMPRESSED_DXT5_RGBA = 17,
    PIXELFORMAT_COMPRESSED_ETC1_RGB = 18,
    PIXELFORMAT_COMPRESSED_ETC2_RGB = 19,
    PIXELFORMAT_COMPRESSED_ETC2_EAC_RGBA = 20,
    PIXELFORMAT_COMPRESSED_PVRT_RGB = 21,
    PIXELFORMAT_COMPRESSED_PVRT_RGBA = 22,
    PIXELFORMAT_COMPRESSED_ASTC_4x4_RGBA = 23,
    PIXELFORMAT_COMPRESSED_ASTC_8x8_RGBA = 24,
}

#[repr(u32)]
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum TextureFilter {
    TEXTURE_FILTER_POINT = 0,
    TEXTURE_FILTER_BILINEAR = 1,
    TEXTURE_FILTER_TRILINEAR = 2,
    TEXTURE_FILTER_ANISOTROPIC_4X = 3,
    TEXTURE_FILTER_ANISOTROPIC_8X = 4,
    TEXTURE_FILTER_ANISOTROPIC_16X = 5,
}

#[repr(u32)]
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum TextureWrap {
    TEXTURE_WRAP_REPEAT = 0,
    TEXTURE_WRAP_CLAMP = 1,
    TEXTURE_WRAP_MIRROR_REPEAT = 2,
    TEXTURE_WRAP_MIRROR_CLAMP = 3,
}

#[repr(u32)]
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum CubemapLayout {
    CUBEMAP_LAYOUT_AUTO_DETECT = 0,
    CUBEMAP_LAYOUT_LINE_VERTICAL = 1,
    CUBEMAP_LAYOUT_LINE_HORIZONTAL = 2,
    CUBEMAP_LAYOUT_CROSS_THREE_BY_FOUR = 3,
    CUBEMAP_LAYOUT_CROSS_FOUR_BY_THREE = 4,
}

#[repr(u32)]
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum FontType {
    FONT_DEFAULT = 0,
    FONT_BITMAP = 1,
    FONT_SDF = 2,
}

#[repr(u32)]
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum BlendMode {
    BLEND_ALPHA = 0,
    BLEND_ADDITIVE = 1,
    BLEND_MULTIPLIED = 2,
    BLEND_ADD_COLORS = 3,
    BLEND_SUBTRACT_COLORS = 4,
    BLEND_ALPHA_PREMULTIPLY = 5,
    BLEND_CUSTOM = 6,
    BLEND_CUSTOM_SEPARATE = 7,
}

#[repr(u32)]
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Gesture {
    GESTURE_NONE = 0,
    GESTURE_TAP = 1,
    GESTURE_DOUBLETAP = 2,
    GESTURE_HOLD = 4,
    GESTURE_DRAG = 8,
    GESTURE_SWIPE_RIGHT = 16,
    GESTURE_SWIPE_LEFT = 32,
    GESTURE_SWIPE_UP = 64,
    GESTURE_SWIPE_DOWN = 128,
    GESTURE_PINCH_IN = 256,
    GESTURE_PINCH_OUT = 512,
}

#[repr(u32)]
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum CameraMode {
    CAMERA_CUSTOM = 0,
    CAMERA_FREE = 1,
    CAMERA_ORBITAL = 2,
    CAMERA_FIRST_PERSON = 3,
    CAMERA_THIRD_PERSON = 4,
}

#[repr(u32)]
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum CameraProjection {
    CAMERA_PERSPECTIVE = 0,
    CAMERA_ORTHOGRAPHIC = 1,
}

#[repr(u32)]
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum NPatchLayout {
    NPATCH_NINE_PATCH = 0,
    NPATCH_THREE_PATCH_VERTICAL = 1,
    NPATCH_THREE_PATCH_HORIZONTAL = 2,
}

#[repr(u32)]
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum rlGlVersion {
    RL_OPENGL_11 = 1,
    RL_OPENGL_21 = 2,
    RL_OPENGL_33 = 3,
    RL_OPENGL_43 = 4,
    RL_OPENGL_ES_20 = 5,
    RL_OPENGL_ES_30 = 6,
}

#[repr(u32)]
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum rlTraceLogLevel {
    RL_LOG_ALL = 0,
    RL_LOG_TRACE = 1,
    RL_LOG_DEBUG = 2,
    RL_LOG_INFO = 3,
    RL_LOG_WARNING = 4,
    RL_LOG_ERROR = 5,
    RL_LOG_FATAL = 6,
    RL_LOG_NONE = 7,
}

#[repr(u32)]
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum rlPixelFormat {
    RL_PIXELFORMAT_UNCOMPRESSED_GRAYSCALE = 1,
    RL_PIXELFORMAT_UNCOMPRESSED_GRAY_ALPHA = 2,
    RL_PIXELFORMAT_UNCOMPRESSED_R5G6B5 = 3,
    RL_PIXELFORMAT_UNCOMPRESSED_R8G8B8 = 4,
    RL_PIXELFORMAT_UNCOMPRESSED_R5G5B5A1 = 5,
    RL_PIXELFORMAT_UNCOMPRESSED_R4G4B4A4 = 6,
    RL_PIXELFORMAT_UNCOMPRESSED_R8G8B8A8 = 7,
    RL_PIXELFORMAT_UNCOMPRESSED_R32 = 8,
    RL_PIXELFORMAT_UNCOMPRESSED_R32G32B32 = 9,
    RL_PIXELFORMAT_UNCOMPRESSED_R32G32B32A32 = 10,
    RL_PIXELFORMAT_UNCOMPRESSED_R16 = 11,
    RL_PIXELFORMAT_UNCOMPRESSED_R16G16B16 = 12,
    RL_PIXELFORMAT_UNCOMPRESSED_R16G16B16A16 = 13,
    RL_PIXELFORMAT_COMPRESSED_DXT1_RGB = 14,
    RL_PIXELFORMAT_COMPRESSED_DXT1_RGBA = 15,
    RL_PIXELFORMAT_COMPRESSED_DXT3_RGBA = 16,
    RL_PIXELFORMAT_COMPRESSED_DXT5_RGBA = 17,
    RL_PIXELFORMAT_COMPRESSED_ETC1_RGB = 18,
    RL_PIXELFORMAT_COMPRESSED_ETC2_RGB = 19,
    RL_PIXELFORMAT_COMPRESSED_ETC2_EAC_RGBA = 20,
    RL_PIXELFORMAT_COMPRESSED_PVRT_RGB = 21,
    RL_PIXELFORMAT_COMPRESSED_PVRT_RGBA = 22,
    RL_PIXELFORMAT_COMPRESSED_ASTC_4x4_RGBA = 23,
    RL_PIXELFORMAT_COMPRESSED_ASTC_8x8_RGBA = 24,
}

#[repr(u32)]
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum rlTextureFilter {
    RL_TEXTURE_FILTER_POINT = 0,
    RL_TEXTURE_FILTER_BILINEAR = 1,
    RL_TEXTURE_FILTER_TRILINEAR = 2,
    RL_TEXTURE_FILTER_ANISOTROPIC_4X = 3,
    RL_TEXTURE_FILTER_ANISOTROPIC_8X = 4,
    RL_TEXTURE_FILTER_ANISOTROPIC_16X = 5,
}

#[repr(u32)]
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum rlBlendMode {
    RL_BLEND_ALPHA = 0,
    RL_BLEND_ADDITIVE = 1,
    RL_BLEND_MULTIPLIED = 2,
    RL_BLEND_ADD_COLORS = 3,
    RL_BLEND_SUBTRACT_COLORS = 4,
    RL_BLEND_ALPHA_PREMULTIPLY = 5,
    RL_BLEND_CUSTOM = 6,
    RL_BLEND_CUSTOM_SEPARATE = 7,
}

#[repr(u32)]
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum rlShaderLocationIndex {
    RL_SHADER_LOC_VERTEX_POSITION = 0,
    RL_SHADER_LOC_VERTEX_TEXCOORD01 = 1,
    RL_SHADER_LOC_VERTEX_TEXCOORD02 = 2,
    RL_SHADER_LOC_VERTEX_NORMAL = 3,
    RL_SHADER_LOC_VERTEX_TANGENT = 4,
    RL_SHADER_LOC_VERTEX_COLOR = 5,
    RL_SHADER_LOC_MATRIX_MVP = 6,
    RL_SHADER_LOC_MATRIX_VIEW = 7,
    RL_SHADER_LOC_MATRIX_PROJECTION = 8,
    RL_SHADER_LOC_MATRIX_MODEL = 9,
    RL_SHADER_LOC_MATRIX_NORMAL = 10,
    RL_SHADER_LOC_VECTOR_VIEW = 11,
    RL_SHADER_LOC_COLOR_DIFFUSE = 12,
    RL_SHADER_LOC_COLOR_SPECULAR = 13,
    RL_SHADER_LOC_COLOR_AMBIENT = 14,
    RL_SHADER_LOC_MAP_ALBEDO = 15,
    RL_SHADER_LOC_MAP_METALNESS = 16,
    RL_SHADER_LOC_MAP_NORMAL = 17,
    RL_SHADER_LOC_MAP_ROUGHNESS = 18,
    RL_SHADER_LOC_MAP_OCCLUSION = 19,
    RL_SHADER_LOC_MAP_EMISSION = 20,
    RL_SHADER_LOC_MAP_HEIGHT = 21,
    RL_SHADER_LOC_MAP_CUBEMAP = 22,
    RL_SHADER_LOC_MAP_IRRADIANCE = 23,
    RL_SHADER_LOC_MAP_PREFILTER = 24,
    RL_SHADER_LOC_MAP_BRDF = 25,
}

#[repr(u32)]
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum rlShaderUniformDataType {
    RL_SHADER_UNIFORM_FLOAT = 0,
    RL_SHADER_UNIFORM_VEC2 = 1,
    RL_SHADER_UNIFORM_VEC3 = 2,
    RL_SHADER_UNIFORM_VEC4 = 3,
    RL_SHADER_UNIFORM_INT = 4,
    RL_SHADER_UNIFORM_IVEC2 = 5,
    RL_SHADER_UNIFORM_IVEC3 = 6,
    RL_SHADER_UNIFORM_IVEC4 = 7,
    RL_SHADER_UNIFORM_UINT = 8,
    RL_SHADER_UNIFORM_UIVEC2 = 9,
    RL_SHADER_UNIFORM_UIVEC3 = 10,
    RL_SHADER_UNIFORM_UIVEC4 = 11,
    RL_SHADER_UNIFORM_SAMPLER2D = 12,
}

#[repr(u32)]
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum rlShaderAttributeDataType {
    RL_SHADER_ATTRIB_FLOAT = 0,
    RL_SHADER_ATTRIB_VEC2 = 1,
    RL_SHADER_ATTRIB_VEC3 = 2,
    RL_SHADER_ATTRIB_VEC4 = 3,
}

#[repr(u32)]
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum rlFramebufferAttachType {
    RL_ATTACHMENT_COLOR_CHANNEL0 = 0,
    RL_ATTACHMENT_COLOR_CHANNEL1 = 1,
    RL_ATTACHMENT_COLOR_CHANNEL2 = 2,
    RL_ATTACHMENT_COLOR_CHANNEL3 = 3,
    RL_ATTACHMENT_COLOR_CHANNEL4 = 4,
    RL_ATTACHMENT_COLOR_CHANNEL5 = 5,
    RL_ATTACHMENT_COLOR_CHANNEL6 = 6,
    RL_ATTACHMENT_COLOR_CHANNEL7 = 7,
    RL_ATTACHMENT_DEPTH = 100,
    RL_ATTACHMENT_STENCIL = 200,
}

#[repr(u32)]
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum rlFramebufferAttachTextureType {
    RL_ATTACHMENT_CUBEMAP_POSITIVE_X = 0,
    RL_ATTACHMENT_CUBEMAP_NEGATIVE_X = 1,
    RL_ATTACHMENT_CUBEMAP_POSITIVE_Y = 2,
    RL_ATTACHMENT_CUBEMAP_NEGATIVE_Y = 3,
    RL_ATTACHMENT_CUBEMAP_POSITIVE_Z = 4,
    RL_ATTACHMENT_CUBEMAP_NEGATIVE_Z = 5,
    RL_ATTACHMENT_TEXTURE2D = 100,
    RL_ATTACHMENT_RENDERBUFFER = 200,
}

#[repr(u32)]
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum rlCullMode {
    RL_CULL_FACE_FRONT = 0,
    RL_CULL_FACE_BACK = 1,
}

#[repr(u32)]
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum GuiLabelProperty {
}

#[repr(u32)]
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum GuiButtonProperty {
}

pub type Quaternion = Vector4;
pub type Texture2D = Texture;
pub type TextureCubemap = Texture;
pub type RenderTexture2D = RenderTexture;
pub type Camera = Camera3D;

pub type TraceLogCallback = Option<unsafe extern "C" fn(logLevel: std::os::raw::c_int, text: *const std::os::raw::c_char, args: *mut __va_list_tag)>;
pub type LoadFileDataCallback = Option<unsafe extern "C" fn(fileName: *const std::os::raw::c_char, dataSize: *mut std::os::raw::c_int) -> *mut std::os::raw::c_uchar>;
pub type SaveFileDataCallback = Option<unsafe extern "C" fn(fileName: *const std::os::raw::c_char, data: *mut std::os::raw::c_void, dataSize: std::os::raw::c_int) -> bool>;
pub type LoadFileTextCallback = Option<unsafe extern "C" fn(fileName: *const std::os::raw::c_char) -> *mut std::os::raw::c_char>;
pub type SaveFileTextCallback = Option<unsafe extern "C" fn(fileName: *const std::os::raw::c_char, text: *mut std::os::raw::c_char) -> bool>;
pub type AudioCallback = Option<unsafe extern "C" fn(bufferData: *mut std::os::raw::c_void, frames: std::os::raw::c_uint)>;
pub type rlglLoadProc = Option<unsafe extern "C" fn(name: *const std::os::raw::c_char) -> *mut std::os::raw::c_void>;

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct Vector4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct Matrix {
    pub m0: f32,
    pub m4: f32,
    pub m8: f32,
    pub m12: f32,
    pub m1: f32,
    pub m5: f32,
    pub m9: f32,
    pub m13: f32,
    pub m2: f32,
    pub m6: f32,
    pub m10: f32,
    pub m14: f32,
    pub m3: f32,
    pub m7: f32,
    pub m11: f32,
    pub m15: f32,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct Color {
    pub r: std::os::raw::c_uchar,
    pub g: std::os::raw::c_uchar,
    pub b: std::os::raw::c_uchar,
    pub a: std::os::raw::c_uchar,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct Rectangle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct Image {
    pub data: *mut std::os::raw::c_void,
    pub width: std::os::raw::c_int,
    pub height: std::os::raw::c_int,
    pub mipmaps: std::os::raw::c_int,
    pub format: std::os::raw::c_int,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct Texture {
    pub id: std::os::raw::c_uint,
    pub width: std::os::raw::c_int,
    pub height: std::os::raw::c_int,
    pub mipmaps: std::os::raw::c_int,
    pub format: std::os::raw::c_int,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct RenderTexture {
    pub id: std::os::raw::c_uint,
    pub texture: Texture,
    pub depth: Texture,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct NPatchInfo {
    pub source: Rectangle,
    pub left: std::os::raw::c_int,
    pub top: std::os::raw::c_int,
    pub right: std::os::raw::c_int,
    pub bottom: std::os::raw::c_int,
    pub layout: std::os::raw::c_int,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct GlyphInfo {
    pub value: std::os::raw::c_int,
    pub offsetX: std::os::raw::c_int,
    pub offsetY: std::os::raw::c_int,
    pub advanceX: std::os::raw::c_int,
    pub image: Image,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct Font {
    pub baseSize: std::os::raw::c_int,
    pub glyphCount: std::os::raw::c_int,
    pub glyphPadding: std::os::raw::c_int,
    pub texture: Texture2D,
    pub recs: *mut Rectangle,
    pub glyphs: *mut GlyphInfo,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct Camera3D {
    pub position: Vector3,
    pub target: Vector3,
    pub up: Vector3,
    pub fovy: f32,
    pub projection: std::os::raw::c_int,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct Camera2D {
    pub offset: Vector2,
    pub target: Vector2,
    pub rotation: f32,
    pub zoom: f32,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct Mesh {
    pub vertexCount: std::os::raw::c_int,
    pub triangleCount: std::os::raw::c_int,
    pub vertices: *mut f32,
    pub texcoords: *mut f32,
    pub texcoords2: *mut f32,
    pub normals: *mut f32,
    pub tangents: *mut f32,
    pub colors: *mut std::os::raw::c_uchar,
    pub indices: *mut std::os::raw::c_ushort,
    pub animVertices: *mut f32,
    pub animNormals: *mut f32,
    pub boneIds: *mut std::os::raw::c_uchar,
    pub boneWeights: *mut f32,
    pub boneMatrices: *mut Matrix,
    pub boneCount: std::os::raw::c_int,
    pub vaoId: std::os::raw::c_uint,
    pub vboId: *mut std::os::raw::c_uint,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct Shader {
    pub id: std::os::raw::c_uint,
    pub locs: *mut std::os::raw::c_int,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct MaterialMap {
    pub texture: Texture2D,
    pub color: Color,
    pub value: f32,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct Material {
    pub shader: Shader,
    pub maps: *mut MaterialMap,
    pub params: [f32; 4],
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct Transform {
    pub translation: Vector3,
    pub rotation: Quaternion,
    pub scale: Vector3,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct BoneInfo {
    pub name: [std::os::raw::c_char; 32],
    pub parent: std::os::raw::c_int,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct Model {
    pub transform: Matrix,
    pub meshCount: std::os::raw::c_int,
    pub materialCount: std::os::raw::c_int,
    pub meshes: *mut Mesh,
    pub materials: *mut Material,
    pub meshMaterial: *mut std::os::raw::c_int,
    pub boneCount: std::os::raw::c_int,
    pub bones: *mut BoneInfo,
    pub bindPose: *mut Transform,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct ModelAnimation {
    pub boneCount: std::os::raw::c_int,
    pub frameCount: std::os::raw::c_int,
    pub bones: *mut BoneInfo,
    pub framePoses: *mut *mut Transform,
    pub name: [std::os::raw::c_char; 32],
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct Ray {
    pub position: Vector3,
    pub direction: Vector3,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct RayCollision {
    pub hit: bool,
    pub distance: f32,
    pub point: Vector3,
    pub normal: Vector3,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct BoundingBox {
    pub min: Vector3,
    pub max: Vector3,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct Wave {
    pub frameCount: std::os::raw::c_uint,
    pub sampleRate: std::os::raw::c_uint,
    pub sampleSize: std::os::raw::c_uint,
    pub channels: std::os::raw::c_uint,
    pub data: *mut std::os::raw::c_void,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct AudioStream {
    pub buffer: *mut rAudioBuffer,
    pub processor: *mut rAudioProcessor,
    pub sampleRate: std::os::raw::c_uint,
    pub sampleSize: std::os::raw::c_uint,
    pub channels: std::os::raw::c_uint,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct Sound {
    pub stream: AudioStream,
    pub frameCount: std::os::raw::c_uint,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct Music {
    pub stream: AudioStream,
    pub frameCount: std::os::raw::c_uint,
    pub looping: bool,
    pub ctxType: std::os::raw::c_int,
    pub ctxData: *mut std::os::raw::c_void,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct VrDeviceInfo {
    pub hResolution: std::os::raw::c_int,
    pub vResolution: std::os::raw::c_int,
    pub hScreenSize: f32,
    pub vScreenSize: f32,
    pub eyeToScreenDistance: f32,
    pub lensSeparationDistance: f32,
    pub interpupillaryDistance: f32,
    pub lensDistortionValues: [f32; 4],
    pub chromaAbCorrection: [f32; 4],
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct VrStereoConfig {
    pub projection: [Matrix; 2],
    pub viewOffset: [Matrix; 2],
    pub leftLensCenter: [f32; 2],
    pub rightLensCenter: [f32; 2],
    pub leftScreenCenter: [f32; 2],
    pub rightScreenCenter: [f32; 2],
    pub scale: [f32; 2],
    pub scaleIn: [f32; 2],
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct FilePathList {
    pub capacity: std::os::raw::c_uint,
    pub count: std::os::raw::c_uint,
    pub paths: *mut *mut std::os::raw::c_char,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct AutomationEvent {
    pub frame: std::os::raw::c_uint,
    pub r#type: std::os::raw::c_uint,
    pub params: [std::os::raw::c_int; 4],
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct AutomationEventList {
    pub capacity: std::os::raw::c_uint,
    pub count: std::os::raw::c_uint,
    pub events: *mut AutomationEvent,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct rlVertexBuffer {
    pub elementCount: std::os::raw::c_int,
    pub vertices: *mut f32,
    pub texcoords: *mut f32,
    pub normals: *mut f32,
    pub colors: *mut std::os::raw::c_uchar,
    pub indices: *mut std::os::raw::c_uint,
    pub indices: *mut std::os::raw::c_uint,
    pub indices: #endif,
    pub indices: *mut std::os::raw::c_uint,
    pub indices: *mut std::os::raw::c_ushort,
    pub vaoId: #endif,
    pub vaoId: std::os::raw::c_uint,
    pub vboId: [std::os::raw::c_uint; 5],
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct rlDrawCall {
    pub mode: std::os::raw::c_int,
    pub vertexCount: std::os::raw::c_int,
    pub vertexAlignment: std::os::raw::c_int,
    pub textureId: std::os::raw::c_uint,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct rlRenderBatch {
    pub bufferCount: std::os::raw::c_int,
    pub currentBuffer: std::os::raw::c_int,
    pub vertexBuffer: *mut rlVertexBuffer,
    pub draws: *mut rlDrawCall,
    pub drawCounter: std::os::raw::c_int,
    pub currentDepth: f32,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct rlglData {
    pub currentBatch: *mut rlRenderBatch,
    pub defaultBatch: rlRenderBatch,
    pub vertexCounter: std::os::raw::c_int,
    pub texcoordx: f32,
    pub texcoordy: f32,
    pub normalx: f32,
    pub normaly: f32,
    pub normalz: f32,
    pub colorr: std::os::raw::c_uchar,
    pub colorg: std::os::raw::c_uchar,
    pub colorb: std::os::raw::c_uchar,
    pub colora: std::os::raw::c_uchar,
    pub currentMatrixMode: std::os::raw::c_int,
    pub currentMatrix: *mut Matrix,
    pub modelview: Matrix,
    pub projection: Matrix,
    pub transform: Matrix,
    pub transformRequired: bool,
    pub stack: [Matrix; 32],
    pub stackCounter: std::os::raw::c_int,
    pub defaultTextureId: std::os::raw::c_uint,
    pub activeTextureId: [std::os::raw::c_uint; 4],
    pub defaultVShaderId: std::os::raw::c_uint,
    pub defaultFShaderId: std::os::raw::c_uint,
    pub defaultShaderId: std::os::raw::c_uint,
    pub defaultShaderLocs: *mut std::os::raw::c_int,
    pub currentShaderId: std::os::raw::c_uint,
    pub currentShaderLocs: *mut std::os::raw::c_int,
    pub stereoRender: bool,
    pub projectionStereo: [Matrix; 2],
    pub viewOffsetStereo: [Matrix; 2],
    pub currentBlendMode: std::os::raw::c_int,
    pub glBlendSrcFactor: std::os::raw::c_int,
    pub glBlendDstFactor: std::os::raw::c_int,
    pub glBlendEquation: std::os::raw::c_int,
    pub glBlendSrcFactorRGB: std::os::raw::c_int,
    pub glBlendDestFactorRGB: std::os::raw::c_int,
    pub glBlendSrcFactorAlpha: std::os::raw::c_int,
    pub glBlendDestFactorAlpha: std::os::raw::c_int,
    pub glBlendEquationRGB: std::os::raw::c_int,
    pub glBlendEquationAlpha: std::os::raw::c_int,
    pub glCustomBlendModeModified: bool,
    pub framebufferWidth: std::os::raw::c_int,
    pub framebufferHeight: std::os::raw::c_int,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct rl_float16 {
    pub v: [f32; 16],
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct GuiTextStyle {
    pub size: std::os::raw::c_uint,
    pub charSpacing: std::os::raw::c_int,
    pub lineSpacing: std::os::raw::c_int,
    pub alignmentH: std::os::raw::c_int,
    pub alignmentV: std::os::raw::c_int,
    pub padding: std::os::raw::c_int,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct #endif { _unused: [u8; 0] }
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct rAudioBuffer { _unused: [u8; 0] }
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct rAudioProcessor { _unused: [u8; 0] }

unsafe extern "C" {
    pub fn InitWindow(width: std::os::raw::c_int, height: std::os::raw::c_int, title: *const std::os::raw::c_char);
    pub fn CloseWindow();
    pub fn WindowShouldClose() -> bool;
    pub fn IsWindowReady() -> bool;
    pub fn IsWindowFullscreen() -> bool;
    pub fn IsWindowHidden() -> bool;
    pub fn IsWindowMinimized() -> bool;
    pub fn IsWindowMaximized() -> bool;
    pub fn IsWindowFocused() -> bool;
    pub fn IsWindowResized() -> bool;
    pub fn IsWindowState(flag: std::os::raw::c_uint) -> bool;
    pub fn SetWindowState(flags: std::os::raw::c_uint);
    pub fn ClearWindowState(flags: std::os::raw::c_uint);
    pub fn ToggleFullscreen();
    pub fn ToggleBorderlessWindowed();
    pub fn MaximizeWindow();
    pub fn MinimizeWindow();
    pub fn RestoreWindow();
    pub fn SetWindowIcon(image: Image);
    pub fn SetWindowIcons(images: *mut Image, count: std::os::raw::c_int);
    pub fn SetWindowTitle(title: *const std::os::raw::c_char);
    pub fn SetWindowPosition(x: std::os::raw::c_int, y: std::os::raw::c_int);
    pub fn SetWindowMonitor(monitor: std::os::raw::c_int);
    pub fn SetWindowMinSize(width: std::os::raw::c_int, height: std::os::raw::c_int);
    pub fn SetWindowMaxSize(width: std::os::raw::c_int, height: std::os::raw::c_int);
    pub fn SetWindowSize(width: std::os::raw::c_int, height: std::os::raw::c_int);
    pub fn SetWindowOpacity(opacity: f32);
    pub fn SetWindowFocused();
    pub fn GetWindowHandle() -> *mut std::os::raw::c_void;
    pub fn GetScreenWidth() -> std::os::raw::c_int;
    pub fn GetScreenHeight() -> std::os::raw::c_int;
    pub fn GetRenderWidth() -> std::os::raw::c_int;
    pub fn GetRenderHeight() -> std::os::raw::c_int;
    pub fn GetMonitorCount() -> std::os::raw::c_int;
    pub fn GetCurrentMonitor() -> std::os::raw::c_int;
    pub fn GetMonitorPosition(monitor: std::os::raw::c_int) -> Vector2;
    pub fn GetMonitorWidth(monitor: std::os::raw::c_int) -> std::os::raw::c_int;
    pub fn GetMonitorHeight(monitor: std::os::raw::c_int) -> std::os::raw::c_int;
    pub fn GetMonitorPhysicalWidth(monitor: std::os::raw::c_int) -> std::os::raw::c_int;
    pub fn GetMonitorPhysicalHeight(monitor: std::os::raw::c_int) -> std::os::raw::c_int;
    pub fn GetMonitorRefreshRate(monitor: std::os::raw::c_int) -> std::os::raw::c_int;
    pub fn GetWindowPosition() -> Vector2;
    pub fn GetWindowScaleDPI() -> Vector2;
    pub fn GetMonitorName(monitor: std::os::raw::c_int) -> *const std::os::raw::c_char;
    pub fn SetClipboardText(text: *const std::os::raw::c_char);
    pub fn GetClipboardText() -> *const std::os::raw::c_char;
    pub fn GetClipboardImage() -> Image;
    pub fn EnableEventWaiting();
    pub fn DisableEventWaiting();
    pub fn ShowCursor();
    pub fn HideCursor();
    pub fn IsCursorHidden() -> bool;
    pub fn EnableCursor();
    pub fn DisableCursor();
    pub fn IsCursorOnScreen() -> bool;
    pub fn ClearBackground(color: Color);
    pub fn BeginDrawing();
    pub fn EndDrawing();
    pub fn BeginMode2D(camera: Camera2D);
    pub fn EndMode2D();
    pub fn BeginMode3D(camera: Camera3D);
    pub fn EndMode3D();
    pub fn BeginTextureMode(target: RenderTexture2D);
    pub fn EndTextureMode();
    pub fn BeginShaderMode(shader: Shader);
    pub fn EndShaderMode();
    pub fn BeginBlendMode(mode: std::os::raw::c_int);
    pub fn EndBlendMode();
    pub fn BeginScissorMode(x: std::os::raw::c_int, y: std::os::raw::c_int, width: std::os::raw::c_int, height: std::os::raw::c_int);
    pub fn EndScissorMode();
    pub fn BeginVrStereoMode(config: VrStereoConfig);
    pub fn EndVrStereoMode();
    pub fn LoadVrStereoConfig(device: VrDeviceInfo) -> VrStereoConfig;
    pub fn UnloadVrStereoConfig(config: VrStereoConfig);
    pub fn LoadShader(vsFileName: *const std::os::raw::c_char, fsFileName: *const std::os::raw::c_char) -> Shader;
    pub fn LoadShaderFromMemory(vsCode: *const std::os::raw::c_char, fsCode: *const std::os::raw::c_char) -> Shader;
    pub fn IsShaderValid(shader: Shader) -> bool;
    pub fn GetShaderLocation(shader: Shader, uniformName: *const std::os::raw::c_char) -> std::os::raw::c_int;
    pub fn GetShaderLocationAttrib(shader: Shader, attribName: *const std::os::raw::c_char) -> std::os::raw::c_int;
    pub fn SetShaderValue(shader: Shader, locIndex: std::os::raw::c_int, value: *const std::os::raw::c_void, uniformType: std::os::raw::c_int);
    pub fn SetShaderValueV(shader: Shader, locIndex: std::os::raw::c_int, value: *const std::os::raw::c_void, uniformType: std::os::raw::c_int, count: std::os::raw::c_int);
    pub fn SetShaderValueMatrix(shader: Shader, locIndex: std::os::raw::c_int, mat: Matrix);
    pub fn SetShaderValueTexture(shader: Shader, locIndex: std::os::raw::c_int, texture: Texture2D);
    pub fn UnloadShader(shader: Shader);
    pub fn GetScreenToWorldRay(position: Vector2, camera: Camera) -> Ray;
    pub fn GetScreenToWorldRayEx(position: Vector2, camera: Camera, width: std::os::raw::c_int, height: std::os::raw::c_int) -> Ray;
    pub fn GetWorldToScreen(position: Vector3, camera: Camera) -> Vector2;
    pub fn GetWorldToScreenEx(position: Vector3, camera: Camera, width: std::os::raw::c_int, height: std::os::raw::c_int) -> Vector2;
    pub fn GetWorldToScreen2D(position: Vector2, camera: Camera2D) -> Vector2;
    pub fn GetScreenToWorld2D(position: Vector2, camera: Camera2D) -> Vector2;
    pub fn GetCameraMatrix(camera: Camera) -> Matrix;
    pub fn GetCameraMatrix2D(camera: Camera2D) -> Matrix;
    pub fn SetTargetFPS(fps: std::os::raw::c_int);
    pub fn GetFrameTime() -> f32;
    pub fn GetTime() -> f64;
    pub fn GetFPS() -> std::os::raw::c_int;
    pub fn SwapScreenBuffer();
    pub fn PollInputEvents();
    pub fn WaitTime(seconds: f64);
    pub fn SetRandomSeed(seed: std::os::raw::c_uint);
    pub fn GetRandomValue(min: std::os::raw::c_int, max: std::os::raw::c_int) -> std::os::raw::c_int;
    pub fn LoadRandomSequence(count: std::os::raw::c_uint, min: std::os::raw::c_int, max: std::os::raw::c_int) -> *mut std::os::raw::c_int;
    pub fn UnloadRandomSequence(sequence: *mut std::os::raw::c_int);
    pub fn TakeScreenshot(fileName: *const std::os::raw::c_char);
    pub fn SetConfigFlags(flags: std::os::raw::c_uint);
    pub fn OpenURL(url: *const std::os::raw::c_char);
    pub fn TraceLog(logLevel: std::os::raw::c_int, text: *const std::os::raw::c_char, ...);
    pub fn SetTraceLogLevel(logLevel: std::os::raw::c_int);
    pub fn MemAlloc(size: std::os::raw::c_uint) -> *mut std::os::raw::c_void;
    pub fn MemRealloc(ptr: *mut std::os::raw::c_void, size: std::os::raw::c_uint) -> *mut std::os::raw::c_void;
    pub fn MemFree(ptr: *mut std::os::raw::c_void);
    pub fn SetTraceLogCallback(callback: TraceLogCallback);
    pub fn SetLoadFileDataCallback(callback: LoadFileDataCallback);
    pub fn SetSaveFileDataCallback(callback: SaveFileDataCallback);
    pub fn SetLoadFileTextCallback(callback: LoadFileTextCallback);
    pub fn SetSaveFileTextCallback(callback: SaveFileTextCallback);
    pub fn LoadFileData(fileName: *const std::os::raw::c_char, dataSize: *mut std::os::raw::c_int) -> *mut std::os::raw::c_uchar;
    pub fn UnloadFileData(data: *mut std::os::raw::c_uchar);
    pub fn SaveFileData(fileName: *const std::os::raw::c_char, data: *mut std::os::raw::c_void, dataSize: std::os::raw::c_int) -> bool;
    pub fn ExportDataAsCode(data: *const std::os::raw::c_uchar, dataSize: std::os::raw::c_int, fileName: *const std::os::raw::c_char) -> bool;
    pub fn LoadFileText(fileName: *const std::os::raw::c_char) -> *mut std::os::raw::c_char;
    pub fn UnloadFileText(text: *mut std::os::raw::c_char);
    pub fn SaveFileText(fileName: *const std::os::raw::c_char, text: *mut std::os::raw::c_char) -> bool;
    pub fn FileExists(fileName: *const std::os::raw::c_char) -> bool;
    pub fn DirectoryExists(dirPath: *const std::os::raw::c_char) -> bool;
    pub fn IsFileExtension(fileName: *const std::os::raw::c_char, ext: *const std::os::raw::c_char) -> bool;
    pub fn GetFileLength(fileName: *const std::os::raw::c_char) -> std::os::raw::c_int;
    pub fn GetFileExtension(fileName: *const std::os::raw::c_char) -> *const std::os::raw::c_char;
    pub fn GetFileName(filePath: *const std::os::raw::c_char) -> *const std::os::raw::c_char;
    pub fn GetFileNameWithoutExt(filePath: *const std::os::raw::c_char) -> *const std::os::raw::c_char;
    pub fn GetDirectoryPath(filePath: *const std::os::raw::c_char) -> *const std::os::raw::c_char;
    pub fn GetPrevDirectoryPath(dirPath: *const std::os::raw::c_char) -> *const std::os::raw::c_char;
    pub fn GetWorkingDirectory() -> *const std::os::raw::c_char;
    pub fn GetApplicationDirectory() -> *const std::os::raw::c_char;
    pub fn MakeDirectory(dirPath: *const std::os::raw::c_char) -> std::os::raw::c_int;
    pub fn ChangeDirectory(dir: *const std::os::raw::c_char) -> bool;
    pub fn IsPathFile(path: *const std::os::raw::c_char) -> bool;
    pub fn IsFileNameValid(fileName: *const std::os::raw::c_char) -> bool;
    pub fn LoadDirectoryFiles(dirPath: *const std::os::raw::c_char) -> FilePathList;
    pub fn LoadDirectoryFilesEx(basePath: *const std::os::raw::c_char, filter: *const std::os::raw::c_char, scanSubdirs: bool) -> FilePathList;
    pub fn UnloadDirectoryFiles(files: FilePathList);
    pub fn IsFileDropped() -> bool;
    pub fn LoadDroppedFiles() -> FilePathList;
    pub fn UnloadDroppedFiles(files: FilePathList);
    pub fn GetFileModTime(fileName: *const std::os::raw::c_char) -> std::os::raw::c_long;
    pub fn CompressData(data: *const std::os::raw::c_uchar, dataSize: std::os::raw::c_int, compDataSize: *mut std::os::raw::c_int) -> *mut std::os::raw::c_uchar;
    pub fn DecompressData(compData: *const std::os::raw::c_uchar, compDataSize: std::os::raw::c_int, dataSize: *mut std::os::raw::c_int) -> *mut std::os::raw::c_uchar;
    pub fn EncodeDataBase64(data: *const std::os::raw::c_uchar, dataSize: std::os::raw::c_int, outputSize: *mut std::os::raw::c_int) -> *mut std::os::raw::c_char;
    pub fn DecodeDataBase64(data: *const std::os::raw::c_uchar, outputSize: *mut std::os::raw::c_int) -> *mut std::os::raw::c_uchar;
    pub fn ComputeCRC32(data: *mut std::os::raw::c_uchar, dataSize: std::os::raw::c_int) -> std::os::raw::c_uint;
    pub fn ComputeMD5(data: *mut std::os::raw::c_uchar, dataSize: std::os::raw::c_int) -> *mut std::os::raw::c_uint;
    pub fn ComputeSHA1(data: *mut std::os::raw::c_uchar, dataSize: std::os::raw::c_int) -> *mut std::os::raw::c_uint;
    pub fn LoadAutomationEventList(fileName: *const std::os::raw::c_char) -> AutomationEventList;
    pub fn UnloadAutomationEventList(list: AutomationEventList);
    pub fn ExportAutomationEventList(list: AutomationEventList, fileName: *const std::os::raw::c_char) -> bool;
    pub fn SetAutomationEventList(list: *mut AutomationEventList);
    pub fn SetAutomationEventBaseFrame(frame: std::os::raw::c_int);
    pub fn StartAutomationEventRecording();
    pub fn StopAutomationEventRecording();
    pub fn PlayAutomationEvent(event: AutomationEvent);
    pub fn IsKeyPressed(key: std::os::raw::c_int) -> bool;
    pub fn IsKeyPressedRepeat(key: std::os::raw::c_int) -> bool;
    pub fn IsKeyDown(key: std::os::raw::c_int) -> bool;
    pub fn IsKeyReleased(key: std::os::raw::c_int) -> bool;
    pub fn IsKeyUp(key: std::os::raw::c_int) -> bool;
    pub fn GetKeyPressed() -> std::os::raw::c_int;
    pub fn GetCharPressed() -> std::os::raw::c_int;
    pub fn GetKeyName(key: std::os::raw::c_int) -> *const std::os::raw::c_char;
    pub fn SetExitKey(key: std::os::raw::c_int);
    pub fn IsGamepadAvailable(gamepad: std::os::raw::c_int) -> bool;
    pub fn GetGamepadName(gamepad: std::os::raw::c_int) -> *const std::os::raw::c_char;
    pub fn IsGamepadButtonPressed(gamepad: std::os::raw::c_int, button: std::os::raw::c_int) -> bool;
    pub fn IsGamepadButtonDown(gamepad: std::os::raw::c_int, button: std::os::raw::c_int) -> bool;
    pub fn IsGamepadButtonReleased(gamepad: std::os::raw::c_int, button: std::os::raw::c_int) -> bool;
    pub fn IsGamepadButtonUp(gamepad: std::os::raw::c_int, button: std::os::raw::c_int) -> bool;
    pub fn GetGamepadButtonPressed() -> std::os::raw::c_int;
    pub fn GetGamepadAxisCount(gamepad: std::os::raw::c_int) -> std::os::raw::c_int;
    pub fn GetGamepadAxisMovement(gamepad: std::os::raw::c_int, axis: std::os::raw::c_int) -> f32;
    pub fn SetGamepadMappings(mappings: *const std::os::raw::c_char) -> std::os::raw::c_int;
    pub fn SetGamepadVibration(gamepad: std::os::raw::c_int, leftMotor: f32, rightMotor: f32, duration: f32);
    pub fn IsMouseButtonPressed(button: std::os::raw::c_int) -> bool;
    pub fn IsMouseButtonDown(button: std::os::raw::c_int) -> bool;
    pub fn IsMouseButtonReleased(button: std::os::raw::c_int) -> bool;
    pub fn IsMouseButtonUp(button: std::os::raw::c_int) -> bool;
    pub fn GetMouseX() -> std::os::raw::c_int;
    pub fn GetMouseY() -> std::os::raw::c_int;
    pub fn GetMousePosition() -> Vector2;
    pub fn GetMouseDelta() -> Vector2;
    pub fn SetMousePosition(x: std::os::raw::c_int, y: std::os::raw::c_int);
    pub fn SetMouseOffset(offsetX: std::os::raw::c_int, offsetY: std::os::raw::c_int);
    pub fn SetMouseScale(scaleX: f32, scaleY: f32);
    pub fn GetMouseWheelMove() -> f32;
    pub fn GetMouseWheelMoveV() -> Vector2;
    pub fn SetMouseCursor(cursor: std::os::raw::c_int);
    pub fn GetTouchX() -> std::os::raw::c_int;
    pub fn GetTouchY() -> std::os::raw::c_int;
    pub fn GetTouchPosition(index: std::os::raw::c_int) -> Vector2;
    pub fn GetTouchPointId(index: std::os::raw::c_int) -> std::os::raw::c_int;
    pub fn GetTouchPointCount() -> std::os::raw::c_int;
    pub fn SetGesturesEnabled(flags: std::os::raw::c_uint);
    pub fn IsGestureDetected(gesture: std::os::raw::c_uint) -> bool;
    pub fn GetGestureDetected() -> std::os::raw::c_int;
    pub fn GetGestureHoldDuration() -> f32;
    pub fn GetGestureDragVector() -> Vector2;
    pub fn GetGestureDragAngle() -> f32;
    pub fn GetGesturePinchVector() -> Vector2;
    pub fn GetGesturePinchAngle() -> f32;
    pub fn UpdateCamera(camera: *mut Camera, mode: std::os::raw::c_int);
    pub fn UpdateCameraPro(camera: *mut Camera, movement: Vector3, rotation: Vector3, zoom: f32);
    pub fn SetShapesTexture(texture: Texture2D, source: Rectangle);
    pub fn GetShapesTexture() -> Texture2D;
    pub fn GetShapesTextureRectangle() -> Rectangle;
    pub fn DrawPixel(posX: std::os::raw::c_int, posY: std::os::raw::c_int, color: Color);
    pub fn DrawPixelV(position: Vector2, color: Color);
    pub fn DrawLine(startPosX: std::os::raw::c_int, startPosY: std::os::raw::c_int, endPosX: std::os::raw::c_int, endPosY: std::os::raw::c_int, color: Color);
    pub fn DrawLineV(startPos: Vector2, endPos: Vector2, color: Color);
    pub fn DrawLineEx(startPos: Vector2, endPos: Vector2, thick: f32, color: Color);
    pub fn DrawLineStrip(points: *const Vector2, pointCount: std::os::raw::c_int, color: Color);
    pub fn DrawLineBezier(startPos: Vector2, endPos: Vector2, thick: f32, color: Color);
    pub fn DrawCircle(centerX: std::os::raw::c_int, centerY: std::os::raw::c_int, radius: f32, color: Color);
    pub fn DrawCircleSector(center: Vector2, radius: f32, startAngle: f32, endAngle: f32, segments: std::os::raw::c_int, color: Color);
    pub fn DrawCircleSectorLines(center: Vector2, radius: f32, startAngle: f32, endAngle: f32, segments: std::os::raw::c_int, color: Color);
    pub fn DrawCircleGradient(centerX: std::os::raw::c_int, centerY: std::os::raw::c_int, radius: f32, inner: Color, outer: Color);
    pub fn DrawCircleV(center: Vector2, radius: f32, color: Color);
    pub fn DrawCircleLines(centerX: std::os::raw::c_int, centerY: std::os::raw::c_int, radius: f32, color: Color);
    pub fn DrawCircleLinesV(center: Vector2, radius: f32, color: Color);
    pub fn DrawEllipse(centerX: std::os::raw::c_int, centerY: std::os::raw::c_int, radiusH: f32, radiusV: f32, color: Color);
    pub fn DrawEllipseLines(centerX: std::os::raw::c_int, centerY: std::os::raw::c_int, radiusH: f32, radiusV: f32, color: Color);
    pub fn DrawRing(center: Vector2, innerRadius: f32, outerRadius: f32, startAngle: f32, endAngle: f32, segments: std::os::raw::c_int, color: Color);
    pub fn DrawRingLines(center: Vector2, innerRadius: f32, outerRadius: f32, startAngle: f32, endAngle: f32, segments: std::os::raw::c_int, color: Color);
    pub fn DrawRectangle(posX: std::os::raw::c_int, posY: std::os::raw::c_int, width: std::os::raw::c_int, height: std::os::raw::c_int, color: Color);
    pub fn DrawRectangleV(position: Vector2, size: Vector2, color: Color);
    pub fn DrawRectangleRec(rec: Rectangle, color: Color);
    pub fn DrawRectanglePro(rec: Rectangle, origin: Vector2, rotation: f32, color: Color);
    pub fn DrawRectangleGradientV(posX: std::os::raw::c_int, posY: std::os::raw::c_int, width: std::os::raw::c_int, height: std::os::raw::c_int, top: Color, bottom: Color);
    pub fn DrawRectangleGradientH(posX: std::os::raw::c_int, posY: std::os::raw::c_int, width: std::os::raw::c_int, height: std::os::raw::c_int, left: Color, right: Color);
    pub fn DrawRectangleGradientEx(rec: Rectangle, topLeft: Color, bottomLeft: Color, topRight: Color, bottomRight: Color);
    pub fn DrawRectangleLines(posX: std::os::raw::c_int, posY: std::os::raw::c_int, width: std::os::raw::c_int, height: std::os::raw::c_int, color: Color);
    pub fn DrawRectangleLinesEx(rec: Rectangle, lineThick: f32, color: Color);
    pub fn DrawRectangleRounded(rec: Rectangle, roundness: f32, segments: std::os::raw::c_int, color: Color);
    pub fn DrawRectangleRoundedLines(rec: Rectangle, roundness: f32, segments: std::os::raw::c_int, color: Color);
    pub fn DrawRectangleRoundedLinesEx(rec: Rectangle, roundness: f32, segments: std::os::raw::c_int, lineThick: f32, color: Color);
    pub fn DrawTriangle(v1: Vector2, v2: Vector2, v3: Vector2, color: Color);
    pub fn DrawTriangleLines(v1: Vector2, v2: Vector2, v3: Vector2, color: Color);
    pub fn DrawTriangleFan(points: *const Vector2, pointCount: std::os::raw::c_int, color: Color);
    pub fn DrawTriangleStrip(points: *const Vector2, pointCount: std::os::raw::c_int, color: Color);
    pub fn DrawPoly(center: Vector2, sides: std::os::raw::c_int, radius: f32, rotation: f32, color: Color);
    pub fn DrawPolyLines(center: Vector2, sides: std::os::raw::c_int, radius: f32, rotation: f32, color: Color);
    pub fn DrawPolyLinesEx(center: Vector2, sides: std::os::raw::c_int, radius: f32, rotation: f32, lineThick: f32, color: Color);
    pub fn DrawSplineLinear(points: *const Vector2, pointCount: std::os::raw::c_int, thick: f32, color: Color);
    pub fn DrawSplineBasis(points: *const Vector2, pointCount: std::os::raw::c_int, thick: f32, color: Color);
    pub fn DrawSplineCatmullRom(points: *const Vector2, pointCount: std::os::raw::c_int, thick: f32, color: Color);
    pub fn DrawSplineBezierQuadratic(points: *const Vector2, pointCount: std::os::raw::c_int, thick: f32, color: Color);
    pub fn DrawSplineBezierCubic(points: *const Vector2, pointCount: std::os::raw::c_int, thick: f32, color: Color);
    pub fn DrawSplineSegmentLinear(p1: Vector2, p2: Vector2, thick: f32, color: Color);
    pub fn DrawSplineSegmentBasis(p1: Vector2, p2: Vector2, p3: Vector2, p4: Vector2, thick: f32, color: Color);
    pub fn DrawSplineSegmentCatmullRom(p1: Vector2, p2: Vector2, p3: Vector2, p4: Vector2, thick: f32, color: Color);
    pub fn DrawSplineSegmentBezierQuadratic(p1: Vector2, c2: Vector2, p3: Vector2, thick: f32, color: Color);
    pub fn DrawSplineSegmentBezierCubic(p1: Vector2, c2: Vector2, c3: Vector2, p4: Vector2, thick: f32, color: Color);
    pub fn GetSplinePointLinear(startPos: Vector2, endPos: Vector2, t: f32) -> Vector2;
    pub fn GetSplinePointBasis(p1: Vector2, p2: Vector2, p3: Vector2, p4: Vector2, t: f32) -> Vector2;
    pub fn GetSplinePointCatmullRom(p1: Vector2, p2: Vector2, p3: Vector2, p4: Vector2, t: f32) -> Vector2;
    pub fn GetSplinePointBezierQuad(p1: Vector2, c2: Vector2, p3: Vector2, t: f32) -> Vector2;
    pub fn GetSplinePointBezierCubic(p1: Vector2, c2: Vector2, c3: Vector2, p4: Vector2, t: f32) -> Vector2;
    pub fn CheckCollisionRecs(rec1: Rectangle, rec2: Rectangle) -> bool;
    pub fn CheckCollisionCircles(center1: Vector2, radius1: f32, center2: Vector2, radius2: f32) -> bool;
    pub fn CheckCollisionCircleRec(center: Vector2, radius: f32, rec: Rectangle) -> bool;
    pub fn CheckCollisionCircleLine(center: Vector2, radius: f32, p1: Vector2, p2: Vector2) -> bool;
    pub fn CheckCollisionPointRec(point: Vector2, rec: Rectangle) -> bool;
    pub fn CheckCollisionPointCircle(point: Vector2, center: Vector2, radius: f32) -> bool;
    pub fn CheckCollisionPointTriangle(point: Vector2, p1: Vector2, p2: Vector2, p3: Vector2) -> bool;
    pub fn CheckCollisionPointLine(point: Vector2, p1: Vector2, p2: Vector2, threshold: std::os::raw::c_int) -> bool;
    pub fn CheckCollisionPointPoly(point: Vector2, points: *const Vector2, pointCount: std::os::raw::c_int) -> bool;
    pub fn CheckCollisionLines(startPos1: Vector2, endPos1: Vector2, startPos2: Vector2, endPos2: Vector2, collisionPoint: *mut Vector2) -> bool;
    pub fn GetCollisionRec(rec1: Rectangle, rec2: Rectangle) -> Rectangle;
    pub fn LoadImage(fileName: *const std::os::raw::c_char) -> Image;
    pub fn LoadImageRaw(fileName: *const std::os::raw::c_char, width: std::os::raw::c_int, height: std::os::raw::c_int, format: std::os::raw::c_int, headerSize: std::os::raw::c_int) -> Image;
    pub fn LoadImageAnim(fileName: *const std::os::raw::c_char, frames: *mut std::os::raw::c_int) -> Image;
    pub fn LoadImageAnimFromMemory(fileType: *const std::os::raw::c_char, fileData: *const std::os::raw::c_uchar, dataSize: std::os::raw::c_int, frames: *mut std::os::raw::c_int) -> Image;
    pub fn LoadImageFromMemory(fileType: *const std::os::raw::c_char, fileData: *const std::os::raw::c_uchar, dataSize: std::os::raw::c_int) -> Image;
    pub fn LoadImageFromTexture(texture: Texture2D) -> Image;
    pub fn LoadImageFromScreen() -> Image;
    pub fn IsImageValid(image: Image) -> bool;
    pub fn UnloadImage(image: Image);
    pub fn ExportImage(image: Image, fileName: *const std::os::raw::c_char) -> bool;
    pub fn ExportImageToMemory(image: Image, fileType: *const std::os::raw::c_char, fileSize: *mut std::os::raw::c_int) -> *mut std::os::raw::c_uchar;
    pub fn ExportImageAsCode(image: Image, fileName: *const std::os::raw::c_char) -> bool;
    pub fn GenImageColor(width: std::os::raw::c_int, height: std::os::raw::c_int, color: Color) -> Image;
    pub fn GenImageGradientLinear(width: std::os::raw::c_int, height: std::os::raw::c_int, direction: std::os::raw::c_int, start: Color, end: Color) -> Image;
    pub fn GenImageGradientRadial(width: std::os::raw::c_int, height: std::os::raw::c_int, density: f32, inner: Color, outer: Color) -> Image;
    pub fn GenImageGradientSquare(width: std::os::raw::c_int, height: std::os::raw::c_int, density: f32, inner: Color, outer: Color) -> Image;
    pub fn GenImageChecked(width: std::os::raw::c_int, height: std::os::raw::c_int, checksX: std::os::raw::c_int, checksY: std::os::raw::c_int, col1: Color, col2: Color) -> Image;
    pub fn GenImageWhiteNoise(width: std::os::raw::c_int, height: std::os::raw::c_int, factor: f32) -> Image;
    pub fn GenImagePerlinNoise(width: std::os::raw::c_int, height: std::os::raw::c_int, offsetX: std::os::raw::c_int, offsetY: std::os::raw::c_int, scale: f32) -> Image;
    pub fn GenImageCellular(width: std::os::raw::c_int, height: std::os::raw::c_int, tileSize: std::os::raw::c_int) -> Image;
    pub fn GenImageText(width: std::os::raw::c_int, height: std::os::raw::c_int, text: *const std::os::raw::c_char) -> Image;
    pub fn ImageCopy(image: Image) -> Image;
    pub fn ImageFromImage(image: Image, rec: Rectangle) -> Image;
    pub fn ImageFromChannel(image: Image, selectedChannel: std::os::raw::c_int) -> Image;
    pub fn ImageText(text: *const std::os::raw::c_char, fontSize: std::os::raw::c_int, color: Color) -> Image;
    pub fn ImageTextEx(font: Font, text: *const std::os::raw::c_char, fontSize: f32, spacing: f32, tint: Color) -> Image;
    pub fn ImageFormat(image: *mut Image, newFormat: std::os::raw::c_int);
    pub fn ImageToPOT(image: *mut Image, fill: Color);
    pub fn ImageCrop(image: *mut Image, crop: Rectangle);
    pub fn ImageAlphaCrop(image: *mut Image, threshold: f32);
    pub fn ImageAlphaClear(image: *mut Image, color: Color, threshold: f32);
    pub fn ImageAlphaMask(image: *mut Image, alphaMask: Image);
    pub fn ImageAlphaPremultiply(image: *mut Image);
    pub fn ImageBlurGaussian(image: *mut Image, blurSize: std::os::raw::c_int);
    pub fn ImageKernelConvolution(image: *mut Image, kernel: *const f32, kernelSize: std::os::raw::c_int);
    pub fn ImageResize(image: *mut Image, newWidth: std::os::raw::c_int, newHeight: std::os::raw::c_int);
    pub fn ImageResizeNN(image: *mut Image, newWidth: std::os::raw::c_int, newHeight: std::os::raw::c_int);
    pub fn ImageResizeCanvas(image: *mut Image, newWidth: std::os::raw::c_int, newHeight: std::os::raw::c_int, offsetX: std::os::raw::c_int, offsetY: std::os::raw::c_int, fill: Color);
    pub fn ImageMipmaps(image: *mut Image);
    pub fn ImageDither(image: *mut Image, rBpp: std::os::raw::c_int, gBpp: std::os::raw::c_int, bBpp: std::os::raw::c_int, aBpp: std::os::raw::c_int);
    pub fn ImageFlipVertical(image: *mut Image);
    pub fn ImageFlipHorizontal(image: *mut Image);
    pub fn ImageRotate(image: *mut Image, degrees: std::os::raw::c_int);
    pub fn ImageRotateCW(image: *mut Image);
    pub fn ImageRotateCCW(image: *mut Image);
    pub fn ImageColorTint(image: *mut Image, color: Color);
    pub fn ImageColorInvert(image: *mut Image);
    pub fn ImageColorGrayscale(image: *mut Image);
    pub fn ImageColorContrast(image: *mut Image, contrast: f32);
    pub fn ImageColorBrightness(image: *mut Image, brightness: std::os::raw::c_int);
    pub fn ImageColorReplace(image: *mut Image, color: Color, replace: Color);
    pub fn LoadImageColors(image: Image) -> *mut Color;
    pub fn LoadImagePalette(image: Image, maxPaletteSize: std::os::raw::c_int, colorCount: *mut std::os::raw::c_int) -> *mut Color;
    pub fn UnloadImageColors(colors: *mut Color);
    pub fn UnloadImagePalette(colors: *mut Color);
    pub fn GetImageAlphaBorder(image: Image, threshold: f32) -> Rectangle;
    pub fn GetImageColor(image: Image, x: std::os::raw::c_int, y: std::os::raw::c_int) -> Color;
    pub fn ImageClearBackground(dst: *mut Image, color: Color);
    pub fn ImageDrawPixel(dst: *mut Image, posX: std::os::raw::c_int, posY: std::os::raw::c_int, color: Color);
    pub fn ImageDrawPixelV(dst: *mut Image, position: Vector2, color: Color);
    pub fn ImageDrawLine(dst: *mut Image, startPosX: std::os::raw::c_int, startPosY: std::os::raw::c_int, endPosX: std::os::raw::c_int, endPosY: std::os::raw::c_int, color: Color);
    pub fn ImageDrawLineV(dst: *mut Image, start: Vector2, end: Vector2, color: Color);
    pub fn ImageDrawLineEx(dst: *mut Image, start: Vector2, end: Vector2, thick: std::os::raw::c_int, color: Color);
    pub fn ImageDrawCircle(dst: *mut Image, centerX: std::os::raw::c_int, centerY: std::os::raw::c_int, radius: std::os::raw::c_int, color: Color);
    pub fn ImageDrawCircleV(dst: *mut Image, center: Vector2, radius: std::os::raw::c_int, color: Color);
    pub fn ImageDrawCircleLines(dst: *mut Image, centerX: std::os::raw::c_int, centerY: std::os::raw::c_int, radius: std::os::raw::c_int, color: Color);
    pub fn ImageDrawCircleLinesV(dst: *mut Image, center: Vector2, radius: std::os::raw::c_int, color: Color);
    pub fn ImageDrawRectangle(dst: *mut Image, posX: std::os::raw::c_int, posY: std::os::raw::c_int, width: std::os::raw::c_int, height: std::os::raw::c_int, color: Color);
    pub fn ImageDrawRectangleV(dst: *mut Image, position: Vector2, size: Vector2, color: Color);
    pub fn ImageDrawRectangleRec(dst: *mut Image, rec: Rectangle, color: Color);
    pub fn ImageDrawRectangleLines(dst: *mut Image, rec: Rectangle, thick: std::os::raw::c_int, color: Color);
    pub fn ImageDrawTriangle(dst: *mut Image, v1: Vector2, v2: Vector2, v3: Vector2, color: Color);
    pub fn ImageDrawTriangleEx(dst: *mut Image, v1: Vector2, v2: Vector2, v3: Vector2, c1: Color, c2: Color, c3: Color);
    pub fn ImageDrawTriangleLines(dst: *mut Image, v1: Vector2, v2: Vector2, v3: Vector2, color: Color);
    pub fn ImageDrawTriangleFan(dst: *mut Image, points: *mut Vector2, pointCount: std::os::raw::c_int, color: Color);
    pub fn ImageDrawTriangleStrip(dst: *mut Image, points: *mut Vector2, pointCount: std::os::raw::c_int, color: Color);
    pub fn ImageDraw(dst: *mut Image, src: Image, srcRec: Rectangle, dstRec: Rectangle, tint: Color);
    pub fn ImageDrawText(dst: *mut Image, text: *const std::os::raw::c_char, posX: std::os::raw::c_int, posY: std::os::raw::c_int, fontSize: std::os::raw::c_int, color: Color);
    pub fn ImageDrawTextEx(dst: *mut Image, font: Font, text: *const std::os::raw::c_char, position: Vector2, fontSize: f32, spacing: f32, tint: Color);
    pub fn LoadTexture(fileName: *const std::os::raw::c_char) -> Texture2D;
    pub fn LoadTextureFromImage(image: Image) -> Texture2D;
    pub fn LoadTextureCubemap(image: Image, layout: std::os::raw::c_int) -> TextureCubemap;
    pub fn LoadRenderTexture(width: std::os::raw::c_int, height: std::os::raw::c_int) -> RenderTexture2D;
    pub fn IsTextureValid(texture: Texture2D) -> bool;
    pub fn UnloadTexture(texture: Texture2D);
    pub fn IsRenderTextureValid(target: RenderTexture2D) -> bool;
    pub fn UnloadRenderTexture(target: RenderTexture2D);
    pub fn UpdateTexture(texture: Texture2D, pixels: *const std::os::raw::c_void);
    pub fn UpdateTextureRec(texture: Texture2D, rec: Rectangle, pixels: *const std::os::raw::c_void);
    pub fn GenTextureMipmaps(texture: *mut Texture2D);
    pub fn SetTextureFilter(texture: Texture2D, filter: std::os::raw::c_int);
    pub fn SetTextureWrap(texture: Texture2D, wrap: std::os::raw::c_int);
    pub fn DrawTexture(texture: Texture2D, posX: std::os::raw::c_int, posY: std::os::raw::c_int, tint: Color);
    pub fn DrawTextureV(texture: Texture2D, position: Vector2, tint: Color);
    pub fn DrawTextureEx(texture: Texture2D, position: Vector2, rotation: f32, scale: f32, tint: Color);
    pub fn DrawTextureRec(texture: Texture2D, source: Rectangle, position: Vector2, tint: Color);
    pub fn DrawTexturePro(texture: Texture2D, source: Rectangle, dest: Rectangle, origin: Vector2, rotation: f32, tint: Color);
    pub fn DrawTextureNPatch(texture: Texture2D, nPatchInfo: NPatchInfo, dest: Rectangle, origin: Vector2, rotation: f32, tint: Color);
    pub fn ColorIsEqual(col1: Color, col2: Color) -> bool;
    pub fn Fade(color: Color, alpha: f32) -> Color;
    pub fn ColorToInt(color: Color) -> std::os::raw::c_int;
    pub fn ColorNormalize(color: Color) -> Vector4;
    pub fn ColorFromNormalized(normalized: Vector4) -> Color;
    pub fn ColorToHSV(color: Color) -> Vector3;
    pub fn ColorFromHSV(hue: f32, saturation: f32, value: f32) -> Color;
    pub fn ColorTint(color: Color, tint: Color) -> Color;
    pub fn ColorBrightness(color: Color, factor: f32) -> Color;
    pub fn ColorContrast(color: Color, contrast: f32) -> Color;
    pub fn ColorAlpha(color: Color, alpha: f32) -> Color;
    pub fn ColorAlphaBlend(dst: Color, src: Color, tint: Color) -> Color;
    pub fn ColorLerp(color1: Color, color2: Color, factor: f32) -> Color;
    pub fn GetColor(hexValue: std::os::raw::c_uint) -> Color;
    pub fn GetPixelColor(srcPtr: *mut std::os::raw::c_void, format: std::os::raw::c_int) -> Color;
    pub fn SetPixelColor(dstPtr: *mut std::os::raw::c_void, color: Color, format: std::os::raw::c_int);
    pub fn GetPixelDataSize(width: std::os::raw::c_int, height: std::os::raw::c_int, format: std::os::raw::c_int) -> std::os::raw::c_int;
    pub fn GetFontDefault() -> Font;
    pub fn LoadFont(fileName: *const std::os::raw::c_char) -> Font;
    pub fn LoadFontEx(fileName: *const std::os::raw::c_char, fontSize: std::os::raw::c_int, codepoints: *mut std::os::raw::c_int, codepointCount: std::os::raw::c_int) -> Font;
    pub fn LoadFontFromImage(image: Image, key: Color, firstChar: std::os::raw::c_int) -> Font;
    pub fn LoadFontFromMemory(fileType: *const std::os::raw::c_char, fileData: *const std::os::raw::c_uchar, dataSize: std::os::raw::c_int, fontSize: std::os::raw::c_int, codepoints: *mut std::os::raw::c_int, codepointCount: std::os::raw::c_int) -> Font;
    pub fn IsFontValid(font: Font) -> bool;
    pub fn LoadFontData(fileData: *const std::os::raw::c_uchar, dataSize: std::os::raw::c_int, fontSize: std::os::raw::c_int, codepoints: *mut std::os::raw::c_int, codepointCount: std::os::raw::c_int, r#type: std::os::raw::c_int) -> *mut GlyphInfo;
    pub fn GenImageFontAtlas(glyphs: *const GlyphInfo, glyphRecs: *mut *mut Rectangle, glyphCount: std::os::raw::c_int, fontSize: std::os::raw::c_int, padding: std::os::raw::c_int, packMethod: std::os::raw::c_int) -> Image;
    pub fn UnloadFontData(glyphs: *mut GlyphInfo, glyphCount: std::os::raw::c_int);
    pub fn UnloadFont(font: Font);
    pub fn ExportFontAsCode(font: Font, fileName: *const std::os::raw::c_char) -> bool;
    pub fn DrawFPS(posX: std::os::raw::c_int, posY: std::os::raw::c_int);
    pub fn DrawText(text: *const std::os::raw::c_char, posX: std::os::raw::c_int, posY: std::os::raw::c_int, fontSize: std::os::raw::c_int, color: Color);
    pub fn DrawTextEx(font: Font, text: *const std::os::raw::c_char, position: Vector2, fontSize: f32, spacing: f32, tint: Color);
    pub fn DrawTextPro(font: Font, text: *const std::os::raw::c_char, position: Vector2, origin: Vector2, rotation: f32, fontSize: f32, spacing: f32, tint: Color);
    pub fn DrawTextCodepoint(font: Font, codepoint: std::os::raw::c_int, position: Vector2, fontSize: f32, tint: Color);
    pub fn DrawTextCodepoints(font: Font, codepoints: *const std::os::raw::c_int, codepointCount: std::os::raw::c_int, position: Vector2, fontSize: f32, spacing: f32, tint: Color);
    pub fn SetTextLineSpacing(spacing: std::os::raw::c_int);
    pub fn MeasureText(text: *const std::os::raw::c_char, fontSize: std::os::raw::c_int) -> std::os::raw::c_int;
    pub fn MeasureTextEx(font: Font, text: *const std::os::raw::c_char, fontSize: f32, spacing: f32) -> Vector2;
    pub fn GetGlyphIndex(font: Font, codepoint: std::os::raw::c_int) -> std::os::raw::c_int;
    pub fn GetGlyphInfo(font: Font, codepoint: std::os::raw::c_int) -> GlyphInfo;
    pub fn GetGlyphAtlasRec(font: Font, codepoint: std::os::raw::c_int) -> Rectangle;
    pub fn LoadUTF8(codepoints: *const std::os::raw::c_int, length: std::os::raw::c_int) -> *mut std::os::raw::c_char;
    pub fn UnloadUTF8(text: *mut std::os::raw::c_char);
    pub fn LoadCodepoints(text: *const std::os::raw::c_char, count: *mut std::os::raw::c_int) -> *mut std::os::raw::c_int;
    pub fn UnloadCodepoints(codepoints: *mut std::os::raw::c_int);
    pub fn GetCodepointCount(text: *const std::os::raw::c_char) -> std::os::raw::c_int;
    pub fn GetCodepoint(text: *const std::os::raw::c_char, codepointSize: *mut std::os::raw::c_int) -> std::os::raw::c_int;
    pub fn GetCodepointNext(text: *const std::os::raw::c_char, codepointSize: *mut std::os::raw::c_int) -> std::os::raw::c_int;
    pub fn GetCodepointPrevious(text: *const std::os::raw::c_char, codepointSize: *mut std::os::raw::c_int) -> std::os::raw::c_int;
    pub fn CodepointToUTF8(codepoint: std::os::raw::c_int, utf8Size: *mut std::os::raw::c_int) -> *const std::os::raw::c_char;
    pub fn TextCopy(dst: *mut std::os::raw::c_char, src: *const std::os::raw::c_char) -> std::os::raw::c_int;
    pub fn TextIsEqual(text1: *const std::os::raw::c_char, text2: *const std::os::raw::c_char) -> bool;
    pub fn TextLength(text: *const std::os::raw::c_char) -> std::os::raw::c_uint;
    pub fn TextFormat(text: *const std::os::raw::c_char, ...) -> *const std::os::raw::c_char;
    pub fn TextSubtext(text: *const std::os::raw::c_char, position: std::os::raw::c_int, length: std::os::raw::c_int) -> *const std::os::raw::c_char;
    pub fn TextReplace(text: *const std::os::raw::c_char, replace: *const std::os::raw::c_char, by: *const std::os::raw::c_char) -> *mut std::os::raw::c_char;
    pub fn TextInsert(text: *const std::os::raw::c_char, insert: *const std::os::raw::c_char, position: std::os::raw::c_int) -> *mut std::os::raw::c_char;
    pub fn TextJoin(textList: *mut *const std::os::raw::c_char, count: std::os::raw::c_int, delimiter: *const std::os::raw::c_char) -> *const std::os::raw::c_char;
    pub fn TextSplit(text: *const std::os::raw::c_char, delimiter: std::os::raw::c_char, count: *mut std::os::raw::c_int) -> *mut *const std::os::raw::c_char;
    pub fn TextAppend(text: *mut std::os::raw::c_char, append: *const std::os::raw::c_char, position: *mut std::os::raw::c_int);
    pub fn TextFindIndex(text: *const std::os::raw::c_char, find: *const std::os::raw::c_char) -> std::os::raw::c_int;
    pub fn TextToUpper(text: *const std::os::raw::c_char) -> *const std::os::raw::c_char;
    pub fn TextToLower(text: *const std::os::raw::c_char) -> *const std::os::raw::c_char;
    pub fn TextToPascal(text: *const std::os::raw::c_char) -> *const std::os::raw::c_char;
    pub fn TextToSnake(text: *const std::os::raw::c_char) -> *const std::os::raw::c_char;
    pub fn TextToCamel(text: *const std::os::raw::c_char) -> *const std::os::raw::c_char;
    pub fn TextToInteger(text: *const std::os::raw::c_char) -> std::os::raw::c_int;
    pub fn TextToFloat(text: *const std::os::raw::c_char) -> f32;
    pub fn DrawLine3D(startPos: Vector3, endPos: Vector3, color: Color);
    pub fn DrawPoint3D(position: Vector3, color: Color);
    pub fn DrawCircle3D(center: Vector3, radius: f32, rotationAxis: Vector3, rotationAngle: f32, color: Color);
    pub fn DrawTriangle3D(v1: Vector3, v2: Vector3, v3: Vector3, color: Color);
    pub fn DrawTriangleStrip3D(points: *const Vector3, pointCount: std::os::raw::c_int, color: Color);
    pub fn DrawCube(position: Vector3, width: f32, height: f32, length: f32, color: Color);
    pub fn DrawCubeV(position: Vector3, size: Vector3, color: Color);
    pub fn DrawCubeWires(position: Vector3, width: f32, height: f32, length: f32, color: Color);
    pub fn DrawCubeWiresV(position: Vector3, size: Vector3, color: Color);
    pub fn DrawSphere(centerPos: Vector3, radius: f32, color: Color);
    pub fn DrawSphereEx(centerPos: Vector3, radius: f32, rings: std::os::raw::c_int, slices: std::os::raw::c_int, color: Color);
    pub fn DrawSphereWires(centerPos: Vector3, radius: f32, rings: std::os::raw::c_int, slices: std::os::raw::c_int, color: Color);
    pub fn DrawCylinder(position: Vector3, radiusTop: f32, radiusBottom: f32, height: f32, slices: std::os::raw::c_int, color: Color);
    pub fn DrawCylinderEx(startPos: Vector3, endPos: Vector3, startRadius: f32, endRadius: f32, sides: std::os::raw::c_int, color: Color);
    pub fn DrawCylinderWires(position: Vector3, radiusTop: f32, radiusBottom: f32, height: f32, slices: std::os::raw::c_int, color: Color);
    pub fn DrawCylinderWiresEx(startPos: Vector3, endPos: Vector3, startRadius: f32, endRadius: f32, sides: std::os::raw::c_int, color: Color);
    pub fn DrawCapsule(startPos: Vector3, endPos: Vector3, radius: f32, slices: std::os::raw::c_int, rings: std::os::raw::c_int, color: Color);
    pub fn DrawCapsuleWires(startPos: Vector3, endPos: Vector3, radius: f32, slices: std::os::raw::c_int, rings: std::os::raw::c_int, color: Color);
    pub fn DrawPlane(centerPos: Vector3, size: Vector2, color: Color);
    pub fn DrawRay(ray: Ray, color: Color);
    pub fn DrawGrid(slices: std::os::raw::c_int, spacing: f32);
    pub fn LoadModel(fileName: *const std::os::raw::c_char) -> Model;
    pub fn LoadModelFromMesh(mesh: Mesh) -> Model;
    pub fn IsModelValid(model: Model) -> bool;
    pub fn UnloadModel(model: Model);
    pub fn GetModelBoundingBox(model: Model) -> BoundingBox;
    pub fn DrawModel(model: Model, position: Vector3, scale: f32, tint: Color);
    pub fn DrawModelEx(model: Model, position: Vector3, rotationAxis: Vector3, rotationAngle: f32, scale: Vector3, tint: Color);
    pub fn DrawModelWires(model: Model, position: Vector3, scale: f32, tint: Color);
    pub fn DrawModelWiresEx(model: Model, position: Vector3, rotationAxis: Vector3, rotationAngle: f32, scale: Vector3, tint: Color);
    pub fn DrawModelPoints(model: Model, position: Vector3, scale: f32, tint: Color);
    pub fn DrawModelPointsEx(model: Model, position: Vector3, rotationAxis: Vector3, rotationAngle: f32, scale: Vector3, tint: Color);
    pub fn DrawBoundingBox(r#box: BoundingBox, color: Color);
    pub fn DrawBillboard(camera: Camera, texture: Texture2D, position: Vector3, scale: f32, tint: Color);
    pub fn DrawBillboardRec(camera: Camera, texture: Texture2D, source: Rectangle, position: Vector3, size: Vector2, tint: Color);
    pub fn DrawBillboardPro(camera: Camera, texture: Texture2D, source: Rectangle, position: Vector3, up: Vector3, size: Vector2, origin: Vector2, rotation: f32, tint: Color);
    pub fn UploadMesh(mesh: *mut Mesh, dynamic: bool);
    pub fn UpdateMeshBuffer(mesh: Mesh, index: std::os::raw::c_int, data: *const std::os::raw::c_void, dataSize: std::os::raw::c_int, offset: std::os::raw::c_int);
    pub fn UnloadMesh(mesh: Mesh);
    pub fn DrawMesh(mesh: Mesh, material: Material, transform: Matrix);
    pub fn DrawMeshInstanced(mesh: Mesh, material: Material, transforms: *const Matrix, instances: std::os::raw::c_int);
    pub fn GetMeshBoundingBox(mesh: Mesh) -> BoundingBox;
    pub fn GenMeshTangents(mesh: *mut Mesh);
    pub fn ExportMesh(mesh: Mesh, fileName: *const std::os::raw::c_char) -> bool;
    pub fn ExportMeshAsCode(mesh: Mesh, fileName: *const std::os::raw::c_char) -> bool;
    pub fn GenMeshPoly(sides: std::os::raw::c_int, radius: f32) -> Mesh;
    pub fn GenMeshPlane(width: f32, length: f32, resX: std::os::raw::c_int, resZ: std::os::raw::c_int) -> Mesh;
    pub fn GenMeshCube(width: f32, height: f32, length: f32) -> Mesh;
    pub fn GenMeshSphere(radius: f32, rings: std::os::raw::c_int, slices: std::os::raw::c_int) -> Mesh;
    pub fn GenMeshHemiSphere(radius: f32, rings: std::os::raw::c_int, slices: std::os::raw::c_int) -> Mesh;
    pub fn GenMeshCylinder(radius: f32, height: f32, slices: std::os::raw::c_int) -> Mesh;
    pub fn GenMeshCone(radius: f32, height: f32, slices: std::os::raw::c_int) -> Mesh;
    pub fn GenMeshTorus(radius: f32, size: f32, radSeg: std::os::raw::c_int, sides: std::os::raw::c_int) -> Mesh;
    pub fn GenMeshKnot(radius: f32, size: f32, radSeg: std::os::raw::c_int, sides: std::os::raw::c_int) -> Mesh;
    pub fn GenMeshHeightmap(heightmap: Image, size: Vector3) -> Mesh;
    pub fn GenMeshCubicmap(cubicmap: Image, cubeSize: Vector3) -> Mesh;
    pub fn LoadMaterials(fileName: *const std::os::raw::c_char, materialCount: *mut std::os::raw::c_int) -> *mut Material;
    pub fn LoadMaterialDefault() -> Material;
    pub fn IsMaterialValid(material: Material) -> bool;
    pub fn UnloadMaterial(material: Material);
    pub fn SetMaterialTexture(material: *mut Material, mapType: std::os::raw::c_int, texture: Texture2D);
    pub fn SetModelMeshMaterial(model: *mut Model, meshId: std::os::raw::c_int, materialId: std::os::raw::c_int);
    pub fn LoadModelAnimations(fileName: *const std::os::raw::c_char, animCount: *mut std::os::raw::c_int) -> *mut ModelAnimation;
    pub fn UpdateModelAnimation(model: Model, anim: ModelAnimation, frame: std::os::raw::c_int);
    pub fn UpdateModelAnimationBones(model: Model, anim: ModelAnimation, frame: std::os::raw::c_int);
    pub fn UnloadModelAnimation(anim: ModelAnimation);
    pub fn UnloadModelAnimations(animations: *mut ModelAnimation, animCount: std::os::raw::c_int);
    pub fn IsModelAnimationValid(model: Model, anim: ModelAnimation) -> bool;
    pub fn CheckCollisionSpheres(center1: Vector3, radius1: f32, center2: Vector3, radius2: f32) -> bool;
    pub fn CheckCollisionBoxes(box1: BoundingBox, box2: BoundingBox) -> bool;
    pub fn CheckCollisionBoxSphere(r#box: BoundingBox, center: Vector3, radius: f32) -> bool;
    pub fn GetRayCollisionSphere(ray: Ray, center: Vector3, radius: f32) -> RayCollision;
    pub fn GetRayCollisionBox(ray: Ray, r#box: BoundingBox) -> RayCollision;
    pub fn GetRayCollisionMesh(ray: Ray, mesh: Mesh, transform: Matrix) -> RayCollision;
    pub fn GetRayCollisionTriangle(ray: Ray, p1: Vector3, p2: Vector3, p3: Vector3) -> RayCollision;
    pub fn GetRayCollisionQuad(ray: Ray, p1: Vector3, p2: Vector3, p3: Vector3, p4: Vector3) -> RayCollision;
    pub fn InitAudioDevice();
    pub fn CloseAudioDevice();
    pub fn IsAudioDeviceReady() -> bool;
    pub fn SetMasterVolume(volume: f32);
    pub fn GetMasterVolume() -> f32;
    pub fn LoadWave(fileName: *const std::os::raw::c_char) -> Wave;
    pub fn LoadWaveFromMemory(fileType: *const std::os::raw::c_char, fileData: *const std::os::raw::c_uchar, dataSize: std::os::raw::c_int) -> Wave;
    pub fn IsWaveValid(wave: Wave) -> bool;
    pub fn LoadSound(fileName: *const std::os::raw::c_char) -> Sound;
    pub fn LoadSoundFromWave(wave: Wave) -> Sound;
    pub fn LoadSoundAlias(source: Sound) -> Sound;
    pub fn IsSoundValid(sound: Sound) -> bool;
    pub fn UpdateSound(sound: Sound, data: *const std::os::raw::c_void, sampleCount: std::os::raw::c_int);
    pub fn UnloadWave(wave: Wave);
    pub fn UnloadSound(sound: Sound);
    pub fn UnloadSoundAlias(alias: Sound);
    pub fn ExportWave(wave: Wave, fileName: *const std::os::raw::c_char) -> bool;
    pub fn ExportWaveAsCode(wave: Wave, fileName: *const std::os::raw::c_char) -> bool;
    pub fn PlaySound(sound: Sound);
    pub fn StopSound(sound: Sound);
    pub fn PauseSound(sound: Sound);
    pub fn ResumeSound(sound: Sound);
    pub fn IsSoundPlaying(sound: Sound) -> bool;
    pub fn SetSoundVolume(sound: Sound, volume: f32);
    pub fn SetSoundPitch(sound: Sound, pitch: f32);
    pub fn SetSoundPan(sound: Sound, pan: f32);
    pub fn WaveCopy(wave: Wave) -> Wave;
    pub fn WaveCrop(wave: *mut Wave, initFrame: std::os::raw::c_int, finalFrame: std::os::raw::c_int);
    pub fn WaveFormat(wave: *mut Wave, sampleRate: std::os::raw::c_int, sampleSize: std::os::raw::c_int, channels: std::os::raw::c_int);
    pub fn LoadWaveSamples(wave: Wave) -> *mut f32;
    pub fn UnloadWaveSamples(samples: *mut f32);
    pub fn LoadMusicStream(fileName: *const std::os::raw::c_char) -> Music;
    pub fn LoadMusicStreamFromMemory(fileType: *const std::os::raw::c_char, data: *const std::os::raw::c_uchar, dataSize: std::os::raw::c_int) -> Music;
    pub fn IsMusicValid(music: Music) -> bool;
    pub fn UnloadMusicStream(music: Music);
    pub fn PlayMusicStream(music: Music);
    pub fn IsMusicStreamPlaying(music: Music) -> bool;
    pub fn UpdateMusicStream(music: Music);
    pub fn StopMusicStream(music: Music);
    pub fn PauseMusicStream(music: Music);
    pub fn ResumeMusicStream(music: Music);
    pub fn SeekMusicStream(music: Music, position: f32);
    pub fn SetMusicVolume(music: Music, volume: f32);
    pub fn SetMusicPitch(music: Music, pitch: f32);
    pub fn SetMusicPan(music: Music, pan: f32);
    pub fn GetMusicTimeLength(music: Music) -> f32;
    pub fn GetMusicTimePlayed(music: Music) -> f32;
    pub fn LoadAudioStream(sampleRate: std::os::raw::c_uint, sampleSize: std::os::raw::c_uint, channels: std::os::raw::c_uint) -> AudioStream;
    pub fn IsAudioStreamValid(stream: AudioStream) -> bool;
    pub fn UnloadAudioStream(stream: AudioStream);
    pub fn UpdateAudioStream(stream: AudioStream, data: *const std::os::raw::c_void, frameCount: std::os::raw::c_int);
    pub fn IsAudioStreamProcessed(stream: AudioStream) -> bool;
    pub fn PlayAudioStream(stream: AudioStream);
    pub fn PauseAudioStream(stream: AudioStream);
    pub fn ResumeAudioStream(stream: AudioStream);
    pub fn IsAudioStreamPlaying(stream: AudioStream) -> bool;
    pub fn StopAudioStream(stream: AudioStream);
    pub fn SetAudioStreamVolume(stream: AudioStream, volume: f32);
    pub fn SetAudioStreamPitch(stream: AudioStream, pitch: f32);
    pub fn SetAudioStreamPan(stream: AudioStream, pan: f32);
    pub fn SetAudioStreamBufferSizeDefault(size: std::os::raw::c_int);
    pub fn SetAudioStreamCallback(stream: AudioStream, callback: AudioCallback);
    pub fn AttachAudioStreamProcessor(stream: AudioStream, processor: AudioCallback);
    pub fn DetachAudioStreamProcessor(stream: AudioStream, processor: AudioCallback);
    pub fn AttachAudioMixedProcessor(processor: AudioCallback);
    pub fn DetachAudioMixedProcessor(processor: AudioCallback);
    pub fn rlMatrixMode(mode: std::os::raw::c_int);
    pub fn rlPushMatrix();
    pub fn rlPopMatrix();
    pub fn rlLoadIdentity();
    pub fn rlTranslatef(x: f32, y: f32, z: f32);
    pub fn rlRotatef(angle: f32, x: f32, y: f32, z: f32);
    pub fn rlScalef(x: f32, y: f32, z: f32);
    pub fn rlMultMatrixf(matf: *const f32);
    pub fn rlFrustum(left: f64, right: f64, bottom: f64, top: f64, znear: f64, zfar: f64);
    pub fn rlOrtho(left: f64, right: f64, bottom: f64, top: f64, znear: f64, zfar: f64);
    pub fn rlViewport(x: std::os::raw::c_int, y: std::os::raw::c_int, width: std::os::raw::c_int, height: std::os::raw::c_int);
    pub fn rlSetClipPlanes(nearPlane: f64, farPlane: f64);
    pub fn rlGetCullDistanceNear() -> f64;
    pub fn rlGetCullDistanceFar() -> f64;
    pub fn rlBegin(mode: std::os::raw::c_int);
    pub fn rlEnd();
    pub fn rlVertex2i(x: std::os::raw::c_int, y: std::os::raw::c_int);
    pub fn rlVertex2f(x: f32, y: f32);
    pub fn rlVertex3f(x: f32, y: f32, z: f32);
    pub fn rlTexCoord2f(x: f32, y: f32);
    pub fn rlNormal3f(x: f32, y: f32, z: f32);
    pub fn rlColor4ub(r: std::os::raw::c_uchar, g: std::os::raw::c_uchar, b: std::os::raw::c_uchar, a: std::os::raw::c_uchar);
    pub fn rlColor3f(x: f32, y: f32, z: f32);
    pub fn rlColor4f(x: f32, y: f32, z: f32, w: f32);
    pub fn rlEnableVertexArray(vaoId: std::os::raw::c_uint) -> bool;
    pub fn rlDisableVertexArray();
    pub fn rlEnableVertexBuffer(id: std::os::raw::c_uint);
    pub fn rlDisableVertexBuffer();
    pub fn rlEnableVertexBufferElement(id: std::os::raw::c_uint);
    pub fn rlDisableVertexBufferElement();
    pub fn rlEnableVertexAttribute(index: std::os::raw::c_uint);
    pub fn rlDisableVertexAttribute(index: std::os::raw::c_uint);
    pub fn rlEnableStatePointer(vertexAttribType: std::os::raw::c_int, buffer: *mut std::os::raw::c_void);
    pub fn rlDisableStatePointer(vertexAttribType: std::os::raw::c_int);
    pub fn rlActiveTextureSlot(slot: std::os::raw::c_int);
    pub fn rlEnableTexture(id: std::os::raw::c_uint);
    pub fn rlDisableTexture();
    pub fn rlEnableTextureCubemap(id: std::os::raw::c_uint);
    pub fn rlDisableTextureCubemap();
    pub fn rlTextureParameters(id: std::os::raw::c_uint, param: std::os::raw::c_int, value: std::os::raw::c_int);
    pub fn rlCubemapParameters(id: std::os::raw::c_uint, param: std::os::raw::c_int, value: std::os::raw::c_int);
    pub fn rlEnableShader(id: std::os::raw::c_uint);
    pub fn rlDisableShader();
    pub fn rlEnableFramebuffer(id: std::os::raw::c_uint);
    pub fn rlDisableFramebuffer();
    pub fn rlGetActiveFramebuffer() -> std::os::raw::c_uint;
    pub fn rlActiveDrawBuffers(count: std::os::raw::c_int);
    pub fn rlBlitFramebuffer(srcX: std::os::raw::c_int, srcY: std::os::raw::c_int, srcWidth: std::os::raw::c_int, srcHeight: std::os::raw::c_int, dstX: std::os::raw::c_int, dstY: std::os::raw::c_int, dstWidth: std::os::raw::c_int, dstHeight: std::os::raw::c_int, bufferMask: std::os::raw::c_int);
    pub fn rlBindFramebuffer(target: std::os::raw::c_uint, framebuffer: std::os::raw::c_uint);
    pub fn rlEnableColorBlend();
    pub fn rlDisableColorBlend();
    pub fn rlEnableDepthTest();
    pub fn rlDisableDepthTest();
    pub fn rlEnableDepthMask();
    pub fn rlDisableDepthMask();
    pub fn rlEnableBackfaceCulling();
    pub fn rlDisableBackfaceCulling();
    pub fn rlColorMask(r: bool, g: bool, b: bool, a: bool);
    pub fn rlSetCullFace(mode: std::os::raw::c_int);
    pub fn rlEnableScissorTest();
    pub fn rlDisableScissorTest();
    pub fn rlScissor(x: std::os::raw::c_int, y: std::os::raw::c_int, width: std::os::raw::c_int, height: std::os::raw::c_int);
    pub fn rlEnableWireMode();
    pub fn rlEnablePointMode();
    pub fn rlDisableWireMode();
    pub fn rlSetLineWidth(width: f32);
    pub fn rlGetLineWidth() -> f32;
    pub fn rlEnableSmoothLines();
    pub fn rlDisableSmoothLines();
    pub fn rlEnableStereoRender();
    pub fn rlDisableStereoRender();
    pub fn rlIsStereoRenderEnabled() -> bool;
    pub fn rlClearColor(r: std::os::raw::c_uchar, g: std::os::raw::c_uchar, b: std::os::raw::c_uchar, a: std::os::raw::c_uchar);
    pub fn rlClearScreenBuffers();
    pub fn rlCheckErrors();
    pub fn rlSetBlendMode(mode: std::os::raw::c_int);
    pub fn rlSetBlendFactors(glSrcFactor: std::os::raw::c_int, glDstFactor: std::os::raw::c_int, glEquation: std::os::raw::c_int);
    pub fn rlSetBlendFactorsSeparate(glSrcRGB: std::os::raw::c_int, glDstRGB: std::os::raw::c_int, glSrcAlpha: std::os::raw::c_int, glDstAlpha: std::os::raw::c_int, glEqRGB: std::os::raw::c_int, glEqAlpha: std::os::raw::c_int);
    pub fn rlglInit(width: std::os::raw::c_int, height: std::os::raw::c_int);
    pub fn rlglClose();
    pub fn rlLoadExtensions(loader: *mut std::os::raw::c_void);
    pub fn rlGetVersion() -> std::os::raw::c_int;
    pub fn rlSetFramebufferWidth(width: std::os::raw::c_int);
    pub fn rlGetFramebufferWidth() -> std::os::raw::c_int;
    pub fn rlSetFramebufferHeight(height: std::os::raw::c_int);
    pub fn rlGetFramebufferHeight() -> std::os::raw::c_int;
    pub fn rlGetTextureIdDefault() -> std::os::raw::c_uint;
    pub fn rlGetShaderIdDefault() -> std::os::raw::c_uint;
    pub fn rlGetShaderLocsDefault() -> *mut std::os::raw::c_int;
    pub fn rlLoadRenderBatch(numBuffers: std::os::raw::c_int, bufferElements: std::os::raw::c_int) -> rlRenderBatch;
    pub fn rlUnloadRenderBatch(batch: rlRenderBatch);
    pub fn rlDrawRenderBatch(batch: *mut rlRenderBatch);
    pub fn rlSetRenderBatchActive(batch: *mut rlRenderBatch);
    pub fn rlDrawRenderBatchActive();
    pub fn rlCheckRenderBatchLimit(vCount: std::os::raw::c_int) -> bool;
    pub fn rlSetTexture(id: std::os::raw::c_uint);
    pub fn rlLoadVertexArray() -> std::os::raw::c_uint;
    pub fn rlLoadVertexBuffer(buffer: *const std::os::raw::c_void, size: std::os::raw::c_int, dynamic: bool) -> std::os::raw::c_uint;
    pub fn rlLoadVertexBufferElement(buffer: *const std::os::raw::c_void, size: std::os::raw::c_int, dynamic: bool) -> std::os::raw::c_uint;
    pub fn rlUpdateVertexBuffer(bufferId: std::os::raw::c_uint, data: *const std::os::raw::c_void, dataSize: std::os::raw::c_int, offset: std::os::raw::c_int);
    pub fn rlUpdateVertexBufferElements(id: std::os::raw::c_uint, data: *const std::os::raw::c_void, dataSize: std::os::raw::c_int, offset: std::os::raw::c_int);
    pub fn rlUnloadVertexArray(vaoId: std::os::raw::c_uint);
    pub fn rlUnloadVertexBuffer(vboId: std::os::raw::c_uint);
    pub fn rlSetVertexAttribute(index: std::os::raw::c_uint, compSize: std::os::raw::c_int, r#type: std::os::raw::c_int, normalized: bool, stride: std::os::raw::c_int, offset: std::os::raw::c_int);
    pub fn rlSetVertexAttributeDivisor(index: std::os::raw::c_uint, divisor: std::os::raw::c_int);
    pub fn rlSetVertexAttributeDefault(locIndex: std::os::raw::c_int, value: *const std::os::raw::c_void, attribType: std::os::raw::c_int, count: std::os::raw::c_int);
    pub fn rlDrawVertexArray(offset: std::os::raw::c_int, count: std::os::raw::c_int);
    pub fn rlDrawVertexArrayElements(offset: std::os::raw::c_int, count: std::os::raw::c_int, buffer: *const std::os::raw::c_void);
    pub fn rlDrawVertexArrayInstanced(offset: std::os::raw::c_int, count: std::os::raw::c_int, instances: std::os::raw::c_int);
    pub fn rlDrawVertexArrayElementsInstanced(offset: std::os::raw::c_int, count: std::os::raw::c_int, buffer: *const std::os::raw::c_void, instances: std::os::raw::c_int);
    pub fn rlLoadTexture(data: *const std::os::raw::c_void, width: std::os::raw::c_int, height: std::os::raw::c_int, format: std::os::raw::c_int, mipmapCount: std::os::raw::c_int) -> std::os::raw::c_uint;
    pub fn rlLoadTextureDepth(width: std::os::raw::c_int, height: std::os::raw::c_int, useRenderBuffer: bool) -> std::os::raw::c_uint;
    pub fn rlLoadTextureCubemap(data: *const std::os::raw::c_void, size: std::os::raw::c_int, format: std::os::raw::c_int, mipmapCount: std::os::raw::c_int) -> std::os::raw::c_uint;
    pub fn rlUpdateTexture(id: std::os::raw::c_uint, offsetX: std::os::raw::c_int, offsetY: std::os::raw::c_int, width: std::os::raw::c_int, height: std::os::raw::c_int, format: std::os::raw::c_int, data: *const std::os::raw::c_void);
    pub fn rlGetGlTextureFormats(format: std::os::raw::c_int, glInternalFormat: *mut std::os::raw::c_uint, glFormat: *mut std::os::raw::c_uint, glType: *mut std::os::raw::c_uint);
    pub fn rlGetPixelFormatName(format: std::os::raw::c_uint) -> *const std::os::raw::c_char;
    pub fn rlUnloadTexture(id: std::os::raw::c_uint);
    pub fn rlGenTextureMipmaps(id: std::os::raw::c_uint, width: std::os::raw::c_int, height: std::os::raw::c_int, format: std::os::raw::c_int, mipmaps: *mut std::os::raw::c_int);
    pub fn rlReadTexturePixels(id: std::os::raw::c_uint, width: std::os::raw::c_int, height: std::os::raw::c_int, format: std::os::raw::c_int) -> *mut std::os::raw::c_void;
    pub fn rlReadScreenPixels(width: std::os::raw::c_int, height: std::os::raw::c_int) -> *mut std::os::raw::c_uchar;
    pub fn rlLoadFramebuffer() -> std::os::raw::c_uint;
    pub fn rlFramebufferAttach(fboId: std::os::raw::c_uint, texId: std::os::raw::c_uint, attachType: std::os::raw::c_int, texType: std::os::raw::c_int, mipLevel: std::os::raw::c_int);
    pub fn rlFramebufferComplete(id: std::os::raw::c_uint) -> bool;
    pub fn rlUnloadFramebuffer(id: std::os::raw::c_uint);
    pub fn rlLoadShaderCode(vsCode: *const std::os::raw::c_char, fsCode: *const std::os::raw::c_char) -> std::os::raw::c_uint;
    pub fn rlCompileShader(shaderCode: *const std::os::raw::c_char, r#type: std::os::raw::c_int) -> std::os::raw::c_uint;
    pub fn rlLoadShaderProgram(vShaderId: std::os::raw::c_uint, fShaderId: std::os::raw::c_uint) -> std::os::raw::c_uint;
    pub fn rlUnloadShaderProgram(id: std::os::raw::c_uint);
    pub fn rlGetLocationUniform(shaderId: std::os::raw::c_uint, uniformName: *const std::os::raw::c_char) -> std::os::raw::c_int;
    pub fn rlGetLocationAttrib(shaderId: std::os::raw::c_uint, attribName: *const std::os::raw::c_char) -> std::os::raw::c_int;
    pub fn rlSetUniform(locIndex: std::os::raw::c_int, value: *const std::os::raw::c_void, uniformType: std::os::raw::c_int, count: std::os::raw::c_int);
    pub fn rlSetUniformMatrix(locIndex: std::os::raw::c_int, mat: Matrix);
    pub fn rlSetUniformMatrices(locIndex: std::os::raw::c_int, mat: *const Matrix, count: std::os::raw::c_int);
    pub fn rlSetUniformSampler(locIndex: std::os::raw::c_int, textureId: std::os::raw::c_uint);
    pub fn rlSetShader(id: std::os::raw::c_uint, locs: *mut std::os::raw::c_int);
    pub fn rlLoadComputeShaderProgram(shaderId: std::os::raw::c_uint) -> std::os::raw::c_uint;
    pub fn rlComputeShaderDispatch(groupX: std::os::raw::c_uint, groupY: std::os::raw::c_uint, groupZ: std::os::raw::c_uint);
    pub fn rlLoadShaderBuffer(size: std::os::raw::c_uint, data: *const std::os::raw::c_void, usageHint: std::os::raw::c_int) -> std::os::raw::c_uint;
    pub fn rlUnloadShaderBuffer(ssboId: std::os::raw::c_uint);
    pub fn rlUpdateShaderBuffer(id: std::os::raw::c_uint, data: *const std::os::raw::c_void, dataSize: std::os::raw::c_uint, offset: std::os::raw::c_uint);
    pub fn rlBindShaderBuffer(id: std::os::raw::c_uint, index: std::os::raw::c_uint);
    pub fn rlReadShaderBuffer(id: std::os::raw::c_uint, dest: *mut std::os::raw::c_void, count: std::os::raw::c_uint, offset: std::os::raw::c_uint);
    pub fn rlCopyShaderBuffer(destId: std::os::raw::c_uint, srcId: std::os::raw::c_uint, destOffset: std::os::raw::c_uint, srcOffset: std::os::raw::c_uint, count: std::os::raw::c_uint);
    pub fn rlGetShaderBufferSize(id: std::os::raw::c_uint) -> std::os::raw::c_uint;
    pub fn rlBindImageTexture(id: std::os::raw::c_uint, index: std::os::raw::c_uint, format: std::os::raw::c_int, readonly: bool);
    pub fn rlGetMatrixModelview() -> Matrix;
    pub fn rlGetMatrixProjection() -> Matrix;
    pub fn rlGetMatrixTransform() -> Matrix;
    pub fn rlGetMatrixProjectionStereo(eye: std::os::raw::c_int) -> Matrix;
    pub fn rlGetMatrixViewOffsetStereo(eye: std::os::raw::c_int) -> Matrix;
    pub fn rlSetMatrixProjection(proj: Matrix);
    pub fn rlSetMatrixModelview(view: Matrix);
    pub fn rlSetMatrixProjectionStereo(right: Matrix, left: Matrix);
    pub fn rlSetMatrixViewOffsetStereo(right: Matrix, left: Matrix);
    pub fn rlLoadDrawCube();
    pub fn rlLoadDrawQuad();
    pub fn GuiEnable();
    pub fn GuiDisable();
    pub fn GuiLock();
    pub fn GuiUnlock();
    pub fn GuiIsLocked() -> bool;
    pub fn GuiSetAlpha(alpha: f32);
    pub fn GuiSetState(state: std::os::raw::c_int);
    pub fn GuiGetState() -> std::os::raw::c_int;
    pub fn GuiSetFont(font: Font);
    pub fn GuiGetFont() -> Font;
    pub fn GuiSetStyle(control: std::os::raw::c_int, property: std::os::raw::c_int, value: std::os::raw::c_int);
    pub fn GuiGetStyle(control: std::os::raw::c_int, property: std::os::raw::c_int) -> std::os::raw::c_int;
    pub fn GuiLoadStyle(fileName: *const std::os::raw::c_char);
    pub fn GuiLoadStyleDefault();
    pub fn GuiEnableTooltip();
    pub fn GuiDisableTooltip();
    pub fn GuiSetTooltip(tooltip: *const std::os::raw::c_char);
    pub fn GuiIconText(iconId: std::os::raw::c_int, text: *const std::os::raw::c_char) -> *const std::os::raw::c_char;
    pub fn GuiSetIconScale(scale: std::os::raw::c_int);
    pub fn GuiGetIcons() -> *mut std::os::raw::c_uint;
    pub fn GuiLoadIcons(fileName: *const std::os::raw::c_char, loadIconsName: bool) -> *mut *mut std::os::raw::c_char;
    pub fn GuiDrawIcon(iconId: std::os::raw::c_int, posX: std::os::raw::c_int, posY: std::os::raw::c_int, pixelSize: std::os::raw::c_int, color: Color);
    pub fn GuiWindowBox(bounds: Rectangle, title: *const std::os::raw::c_char) -> std::os::raw::c_int;
    pub fn GuiGroupBox(bounds: Rectangle, text: *const std::os::raw::c_char) -> std::os::raw::c_int;
    pub fn GuiLine(bounds: Rectangle, text: *const std::os::raw::c_char) -> std::os::raw::c_int;
    pub fn GuiPanel(bounds: Rectangle, text: *const std::os::raw::c_char) -> std::os::raw::c_int;
    pub fn GuiTabBar(bounds: Rectangle, text: *mut *const std::os::raw::c_char, count: std::os::raw::c_int, active: *mut std::os::raw::c_int) -> std::os::raw::c_int;
    pub fn GuiScrollPanel(bounds: Rectangle, text: *const std::os::raw::c_char, content: Rectangle, scroll: *mut Vector2, view: *mut Rectangle) -> std::os::raw::c_int;
    pub fn GuiLabel(bounds: Rectangle, text: *const std::os::raw::c_char) -> std::os::raw::c_int;
    pub fn GuiButton(bounds: Rectangle, text: *const std::os::raw::c_char) -> std::os::raw::c_int;
    pub fn GuiLabelButton(bounds: Rectangle, text: *const std::os::raw::c_char) -> std::os::raw::c_int;
    pub fn GuiToggle(bounds: Rectangle, text: *const std::os::raw::c_char, active: *mut bool) -> std::os::raw::c_int;
    pub fn GuiToggleGroup(bounds: Rectangle, text: *const std::os::raw::c_char, active: *mut std::os::raw::c_int) -> std::os::raw::c_int;
    pub fn GuiToggleSlider(bounds: Rectangle, text: *const std::os::raw::c_char, active: *mut std::os::raw::c_int) -> std::os::raw::c_int;
    pub fn GuiCheckBox(bounds: Rectangle, text: *const std::os::raw::c_char, checked: *mut bool) -> std::os::raw::c_int;
    pub fn GuiComboBox(bounds: Rectangle, text: *const std::os::raw::c_char, active: *mut std::os::raw::c_int) -> std::os::raw::c_int;
    pub fn GuiDropdownBox(bounds: Rectangle, text: *const std::os::raw::c_char, active: *mut std::os::raw::c_int, editMode: bool) -> std::os::raw::c_int;
    pub fn GuiSpinner(bounds: Rectangle, text: *const std::os::raw::c_char, value: *mut std::os::raw::c_int, minValue: std::os::raw::c_int, maxValue: std::os::raw::c_int, editMode: bool) -> std::os::raw::c_int;
    pub fn GuiValueBox(bounds: Rectangle, text: *const std::os::raw::c_char, value: *mut std::os::raw::c_int, minValue: std::os::raw::c_int, maxValue: std::os::raw::c_int, editMode: bool) -> std::os::raw::c_int;
    pub fn GuiTextBox(bounds: Rectangle, text: *mut std::os::raw::c_char, textSize: std::os::raw::c_int, editMode: bool) -> std::os::raw::c_int;
    pub fn GuiSlider(bounds: Rectangle, textLeft: *const std::os::raw::c_char, textRight: *const std::os::raw::c_char, value: *mut f32, minValue: f32, maxValue: f32) -> std::os::raw::c_int;
    pub fn GuiSliderBar(bounds: Rectangle, textLeft: *const std::os::raw::c_char, textRight: *const std::os::raw::c_char, value: *mut f32, minValue: f32, maxValue: f32) -> std::os::raw::c_int;
    pub fn GuiProgressBar(bounds: Rectangle, textLeft: *const std::os::raw::c_char, textRight: *const std::os::raw::c_char, value: *mut f32, minValue: f32, maxValue: f32) -> std::os::raw::c_int;
    pub fn GuiStatusBar(bounds: Rectangle, text: *const std::os::raw::c_char) -> std::os::raw::c_int;
    pub fn GuiDummyRec(bounds: Rectangle, text: *const std::os::raw::c_char) -> std::os::raw::c_int;
    pub fn GuiGrid(bounds: Rectangle, text: *const std::os::raw::c_char, spacing: f32, subdivs: std::os::raw::c_int, mouseCell: *mut Vector2) -> std::os::raw::c_int;
    pub fn GuiListView(bounds: Rectangle, text: *const std::os::raw::c_char, scrollIndex: *mut std::os::raw::c_int, active: *mut std::os::raw::c_int) -> std::os::raw::c_int;
    pub fn GuiListViewEx(bounds: Rectangle, text: *mut *const std::os::raw::c_char, count: std::os::raw::c_int, scrollIndex: *mut std::os::raw::c_int, active: *mut std::os::raw::c_int, focus: *mut std::os::raw::c_int) -> std::os::raw::c_int;
    pub fn GuiMessageBox(bounds: Rectangle, title: *const std::os::raw::c_char, message: *const std::os::raw::c_char, buttons: *const std::os::raw::c_char) -> std::os::raw::c_int;
    pub fn GuiTextInputBox(bounds: Rectangle, title: *const std::os::raw::c_char, message: *const std::os::raw::c_char, buttons: *const std::os::raw::c_char, text: *mut std::os::raw::c_char, textMaxSize: std::os::raw::c_int, secretViewActive: *mut bool) -> std::os::raw::c_int;
    pub fn GuiColorPicker(bounds: Rectangle, text: *const std::os::raw::c_char, color: *mut Color) -> std::os::raw::c_int;
    pub fn GuiColorPanel(bounds: Rectangle, text: *const std::os::raw::c_char, color: *mut Color) -> std::os::raw::c_int;
    pub fn GuiColorBarAlpha(bounds: Rectangle, text: *const std::os::raw::c_char, alpha: *mut f32) -> std::os::raw::c_int;
    pub fn GuiColorBarHue(bounds: Rectangle, text: *const std::os::raw::c_char, value: *mut f32) -> std::os::raw::c_int;
    pub fn GuiColorPickerHSV(bounds: Rectangle, text: *const std::os::raw::c_char, colorHsv: *mut Vector3) -> std::os::raw::c_int;
    pub fn GuiColorPanelHSV(bounds: Rectangle, text: *const std::os::raw::c_char, colorHsv: *mut Vector3) -> std::os::raw::c_int;
    pub fn setLogCallbackWrapper();
    pub fn custom_trace_log_callback(logType: std::os::raw::c_int, text: *const std::os::raw::c_char, ...);
}
