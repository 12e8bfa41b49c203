//! 子系统类别注册表。
//!
//! 类别集合在编译期固定：每个类别有一个短名（用作配置键和消息标签）
//! 和一个完整名称（用于界面展示）。`Master` 是覆盖所有子系统的聚合类别。
//! 注册表构造后只读，没有任何修改接口。

/// 子系统类别。
///
/// 枚举判别值同时是调度器内部容器数组的下标，顺序稳定。
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum LogCategory {
    ActionReplay = 0,
    Audio,
    AudioInterface,
    Boot,
    CommandProcessor,
    Common,
    Console,
    Core,
    DiscIo,
    DspHle,
    DspLle,
    DspMail,
    DspInterface,
    DvdInterface,
    DynaRec,
    ExpansionInterface,
    FileMonitor,
    GdbStub,
    GpFifo,
    HostGpu,
    Ios,
    IosDi,
    IosEs,
    IosFileIo,
    IosSd,
    IosSsl,
    IosStm,
    IosNet,
    IosUsb,
    IosWc24,
    IosWiimote,
    /// 聚合类别，概念上覆盖所有子系统。
    Master,
    MemcardManager,
    MemMap,
    Netplay,
    OsHle,
    OsReport,
    Pad,
    PixelEngine,
    ProcessorInterface,
    PowerPc,
    SerialInterface,
    Sp1,
    Video,
    VideoInterface,
    Wiimote,
    WiiIpc,
}

impl LogCategory {
    /// 类别总数。
    pub const COUNT: usize = 47;

    /// 所有类别，按判别值升序排列。
    pub const ALL: [LogCategory; LogCategory::COUNT] = [
        LogCategory::ActionReplay,
        LogCategory::Audio,
        LogCategory::AudioInterface,
        LogCategory::Boot,
        LogCategory::CommandProcessor,
        LogCategory::Common,
        LogCategory::Console,
        LogCategory::Core,
        LogCategory::DiscIo,
        LogCategory::DspHle,
        LogCategory::DspLle,
        LogCategory::DspMail,
        LogCategory::DspInterface,
        LogCategory::DvdInterface,
        LogCategory::DynaRec,
        LogCategory::ExpansionInterface,
        LogCategory::FileMonitor,
        LogCategory::GdbStub,
        LogCategory::GpFifo,
        LogCategory::HostGpu,
        LogCategory::Ios,
        LogCategory::IosDi,
        LogCategory::IosEs,
        LogCategory::IosFileIo,
        LogCategory::IosSd,
        LogCategory::IosSsl,
        LogCategory::IosStm,
        LogCategory::IosNet,
        LogCategory::IosUsb,
        LogCategory::IosWc24,
        LogCategory::IosWiimote,
        LogCategory::Master,
        LogCategory::MemcardManager,
        LogCategory::MemMap,
        LogCategory::Netplay,
        LogCategory::OsHle,
        LogCategory::OsReport,
        LogCategory::Pad,
        LogCategory::PixelEngine,
        LogCategory::ProcessorInterface,
        LogCategory::PowerPc,
        LogCategory::SerialInterface,
        LogCategory::Sp1,
        LogCategory::Video,
        LogCategory::VideoInterface,
        LogCategory::Wiimote,
        LogCategory::WiiIpc,
    ];

    /// 短名，用作配置键和输出行中的消息标签。
    pub fn short_name(self) -> &'static str {
        match self {
            LogCategory::ActionReplay => "ActionReplay",
            LogCategory::Audio => "Audio",
            LogCategory::AudioInterface => "AI",
            LogCategory::Boot => "BOOT",
            LogCategory::CommandProcessor => "CP",
            LogCategory::Common => "COMMON",
            LogCategory::Console => "CONSOLE",
            LogCategory::Core => "CORE",
            LogCategory::DiscIo => "DIO",
            LogCategory::DspHle => "DSPHLE",
            LogCategory::DspLle => "DSPLLE",
            LogCategory::DspMail => "DSPMails",
            LogCategory::DspInterface => "DSP",
            LogCategory::DvdInterface => "DVD",
            LogCategory::DynaRec => "JIT",
            LogCategory::ExpansionInterface => "EXI",
            LogCategory::FileMonitor => "FileMon",
            LogCategory::GdbStub => "GDB_STUB",
            LogCategory::GpFifo => "GP",
            LogCategory::HostGpu => "Host GPU",
            LogCategory::Ios => "IOS",
            LogCategory::IosDi => "IOS_DI",
            LogCategory::IosEs => "IOS_ES",
            LogCategory::IosFileIo => "IOS_FILEIO",
            LogCategory::IosSd => "IOS_SD",
            LogCategory::IosSsl => "IOS_SSL",
            LogCategory::IosStm => "IOS_STM",
            LogCategory::IosNet => "IOS_NET",
            LogCategory::IosUsb => "IOS_USB",
            LogCategory::IosWc24 => "IOS_WC24",
            LogCategory::IosWiimote => "IOS_WIIMOTE",
            LogCategory::Master => "*",
            LogCategory::MemcardManager => "MemCard Manager",
            LogCategory::MemMap => "MI",
            LogCategory::Netplay => "NETPLAY",
            LogCategory::OsHle => "HLE",
            LogCategory::OsReport => "OSREPORT",
            LogCategory::Pad => "PAD",
            LogCategory::PixelEngine => "PE",
            LogCategory::ProcessorInterface => "PI",
            LogCategory::PowerPc => "PowerPC",
            LogCategory::SerialInterface => "SI",
            LogCategory::Sp1 => "SP1",
            LogCategory::Video => "Video",
            LogCategory::VideoInterface => "VI",
            LogCategory::Wiimote => "Wiimote",
            LogCategory::WiiIpc => "WII_IPC",
        }
    }

    /// 完整名称，用于界面展示。
    pub fn full_name(self) -> &'static str {
        match self {
            LogCategory::ActionReplay => "ActionReplay",
            LogCategory::Audio => "Audio Emulator",
            LogCategory::AudioInterface => "Audio Interface (AI)",
            LogCategory::Boot => "Boot",
            LogCategory::CommandProcessor => "CommandProc",
            LogCategory::Common => "Common",
            LogCategory::Console => "Console",
            LogCategory::Core => "Core",
            LogCategory::DiscIo => "Disc IO",
            LogCategory::DspHle => "DSP HLE",
            LogCategory::DspLle => "DSP LLE",
            LogCategory::DspMail => "DSP Mails",
            LogCategory::DspInterface => "DSPInterface",
            LogCategory::DvdInterface => "DVD Interface",
            LogCategory::DynaRec => "Dynamic Recompiler",
            LogCategory::ExpansionInterface => "Expansion Interface",
            LogCategory::FileMonitor => "File Monitor",
            LogCategory::GdbStub => "GDB Stub",
            LogCategory::GpFifo => "GPFifo",
            LogCategory::HostGpu => "Host GPU",
            LogCategory::Ios => "IOS",
            LogCategory::IosDi => "IOS - Drive Interface",
            LogCategory::IosEs => "IOS - ETicket Services",
            LogCategory::IosFileIo => "IOS - FileIO",
            LogCategory::IosSd => "IOS - SDIO",
            LogCategory::IosSsl => "IOS - SSL",
            LogCategory::IosStm => "IOS - State Transition Manager",
            LogCategory::IosNet => "IOS - Network",
            LogCategory::IosUsb => "IOS - USB",
            LogCategory::IosWc24 => "IOS - WiiConnect24",
            LogCategory::IosWiimote => "IOS - Wii Remote",
            LogCategory::Master => "Master Log",
            LogCategory::MemcardManager => "MemCard Manager",
            LogCategory::MemMap => "MI & memmap",
            LogCategory::Netplay => "Netplay",
            LogCategory::OsHle => "HLE",
            LogCategory::OsReport => "OSReport",
            LogCategory::Pad => "Pad",
            LogCategory::PixelEngine => "PixelEngine",
            LogCategory::ProcessorInterface => "ProcessorInt",
            LogCategory::PowerPc => "IBM CPU",
            LogCategory::SerialInterface => "Serial Interface (SI)",
            LogCategory::Sp1 => "Serial Port 1",
            LogCategory::Video => "Video Backend",
            LogCategory::VideoInterface => "Video Interface (VI)",
            LogCategory::Wiimote => "Wiimote",
            LogCategory::WiiIpc => "WII IPC",
        }
    }

    /// 容器数组下标。
    #[inline]
    pub(crate) fn index(self) -> usize {
        self as usize
    }

    /// 按短名查找类别，忽略大小写。用于解析持久化配置的 `[Logs]` 键。
    pub fn from_short_name(name: &str) -> Option<LogCategory> {
        LogCategory::ALL
            .iter()
            .copied()
            .find(|category| category.short_name().eq_ignore_ascii_case(name))
    }
}
