/// Built-in target lists for the generated asset files this tool was
/// written to clean up. Each preset mirrors one historical cleanup pass.
const EXPO_ICONS: &[&str] = &[
    "assets/adaptive-icon.png",
    "assets/favicon.png",
    "assets/ic_launcher.png",
    "assets/icon_256.png",
    "assets/icon.png",
    "assets/net.png",
    "assets/splash-icon.png",
    "assets/splash-img-256x256.png",
    "assets/splash-img.png",
];

const ANDROID_RES_ICONS: &[&str] = &[
    "android/app/src/main/res/drawable-hdpi/notification_icon.png",
    "android/app/src/main/res/drawable-hdpi/splashscreen_logo.png",
    "android/app/src/main/res/drawable-mdpi/notification_icon.png",
    "android/app/src/main/res/drawable-mdpi/splashscreen_logo.png",
    "android/app/src/main/res/drawable-xhdpi/notification_icon.png",
    "android/app/src/main/res/drawable-xhdpi/splashscreen_logo.png",
    "android/app/src/main/res/drawable-xxhdpi/notification_icon.png",
    "android/app/src/main/res/drawable-xxhdpi/splashscreen_logo.png",
    "android/app/src/main/res/drawable-xxxhdpi/notification_icon.png",
    "android/app/src/main/res/drawable-xxxhdpi/splashscreen_logo.png",
    "android/app/src/main/res/mipmap-hdpi/ic_launcher_adaptive_back.png",
    "android/app/src/main/res/mipmap-hdpi/ic_launcher_adaptive_fore.png",
    "android/app/src/main/res/mipmap-hdpi/ic_launcher_round.png",
    "android/app/src/main/res/mipmap-mdpi/ic_launcher_adaptive_back.png",
    "android/app/src/main/res/mipmap-mdpi/ic_launcher_adaptive_fore.png",
    "android/app/src/main/res/mipmap-mdpi/ic_launcher_round.png",
    "android/app/src/main/res/mipmap-xhdpi/ic_launcher_adaptive_back.png",
    "android/app/src/main/res/mipmap-xhdpi/ic_launcher_adaptive_fore.png",
    "android/app/src/main/res/mipmap-xhdpi/ic_launcher_round.png",
    "android/app/src/main/res/mipmap-xxhdpi/ic_launcher_adaptive_back.png",
    "android/app/src/main/res/mipmap-xxhdpi/ic_launcher_adaptive_fore.png",
    "android/app/src/main/res/mipmap-xxhdpi/ic_launcher_round.png",
    "android/app/src/main/res/mipmap-xxxhdpi/ic_launcher_adaptive_back.png",
    "android/app/src/main/res/mipmap-xxxhdpi/ic_launcher_adaptive_fore.png",
    "android/app/src/main/res/mipmap-xxxhdpi/ic_launcher_round.png",
];

pub fn names() -> &'static [&'static str] {
    &["expo-icons", "android-res-icons"]
}

pub fn targets(name: &str) -> Option<Vec<String>> {
    let paths = match name {
        "expo-icons" => EXPO_ICONS,
        "android-res-icons" => ANDROID_RES_ICONS,
        _ => return None,
    };
    Some(paths.iter().map(|s| s.to_string()).collect())
}
