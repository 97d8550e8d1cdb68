//! Default configuration values

/// Product name, used for the state directory and dev workspace names
pub const PRODUCT_NAME: &str = "kosaio";

/// Default root of the kosaio scripts checkout
pub const DEFAULT_KOSAIO_DIR: &str = "/opt/kosaio";

/// Default root of the system (container) SDK
pub const DEFAULT_SDK_ROOT: &str = "/opt/toolchains/dc";

/// Default root for workspace projects
pub const DEFAULT_PROJECTS_ROOT: &str = "/opt/projects";

/// Identifier of the ports container
pub const PORTS_CONTAINER_ID: &str = "kos-ports";

/// Identifier of the core SDK
pub const SDK_ID: &str = "kos";

/// Identifier of the audio-OS addon
pub const AICAOS_ID: &str = "aicaos";

/// Identifiers that live directly under the SDK root in system mode.
///
/// Everything else is registry-managed and lives under `<sdk_root>/extras`.
pub const CORE_TOOLCHAIN_IDS: &[&str] = &[
    "kos",
    "kos-ports",
    "sh-elf",
    "arm-eabi",
    "aicaos",
    "extras",
    "bin",
];

/// Subdirectory of the SDK root holding registry-managed tools
pub const EXTRAS_SUBDIR: &str = "extras";

/// Suffix of the per-tool marker file that flags host mode
pub const HOST_MARKER_SUFFIX: &str = "_dev";

/// Directories inside the ports container that are not ports
pub const PORTS_SKIP_DIRS: &[&str] = &["utils", "scripts", "include", "lib", "examples", "kos-ports"];

/// Build-description file name inside each port directory
pub const PORT_MAKEFILE: &str = "Makefile";

/// Subdirectory of a port that exists once sources were fetched
pub const PORT_DIST_DIR: &str = "dist";

/// Version marker directory inside the ports container, relative to its root
pub const PORT_VERSION_DIR: &[&str] = &["lib", ".kos-ports"];

/// Compiled static library that marks the SDK as built
pub const SDK_LIBRARY_ARTIFACT: &[&str] = &["lib", "dreamcast", "libkallisti.a"];

/// Compiled ARM driver of the audio-OS addon (host checkout)
pub const AICAOS_DRIVER_ARTIFACT: &[&str] = &["arm", "aicaos.drv"];

/// Compiled SH4 library of the audio-OS addon (host checkout)
pub const AICAOS_LIBRARY_ARTIFACT: &[&str] = &["sh4", "libaicaos.a"];

/// Installed audio-OS library inside the SDK's addon tree
pub const AICAOS_SDK_ADDON_ARTIFACT: &[&str] = &["addons", "lib", "dreamcast", "libaicaos.a"];

/// Extension of registry manifest scripts
pub const REGISTRY_EXTENSION: &str = "sh";

/// Suffix of registry sample files that are never loaded
pub const REGISTRY_SAMPLE_SUFFIX: &str = ".sample";

/// Default description for ports without `SHORT_DESC`
pub const DEFAULT_PORT_DESCRIPTION: &str = "No description";

/// Default version for ports without `PORTVERSION`
pub const DEFAULT_PORT_VERSION: &str = "unknown";

/// Tags assigned to every port record
pub const PORT_TAGS: &str = "port,library";

/// Actions that need the ports container on disk when applied to a port
pub const PORT_ACTIONS: &[&str] = &[
    "install",
    "uninstall",
    "update",
    "build",
    "apply",
    "clean",
    "clone",
    "checkout",
    "reset",
];

/// Minimum proptest iterations
pub const MIN_PROPTEST_ITERATIONS: u32 = 100;
