//! Localized user-facing messages.

/// Supported interface languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    English,
    Japanese,
    Chinese,
    Korean,
    Spanish,
}

/// Environment variables consulted for the language, in order.
const LANGUAGE_VARS: [&str; 4] = ["LANG", "LANGUAGE", "LC_ALL", "LC_MESSAGES"];

impl Language {
    /// Detect the language from the process environment.
    pub fn detect() -> Self {
        Self::detect_with(|name| std::env::var(name).ok())
    }

    /// Detect the language using `lookup` to read environment variables.
    ///
    /// The first non-empty variable decides; later ones are not consulted.
    pub fn detect_with(lookup: impl Fn(&str) -> Option<String>) -> Self {
        LANGUAGE_VARS
            .iter()
            .filter_map(|name| lookup(name))
            .find(|value| !value.trim().is_empty())
            .map_or(Self::English, |value| Self::from_locale(&value))
    }

    /// Map a locale string such as `ja_JP.UTF-8` to a language.
    pub fn from_locale(locale: &str) -> Self {
        let code = locale
            .split('_')
            .next()
            .unwrap_or_default()
            .split('.')
            .next()
            .unwrap_or_default()
            .to_lowercase();
        match code.as_str() {
            "ja" => Self::Japanese,
            "zh" => Self::Chinese,
            "ko" => Self::Korean,
            "es" => Self::Spanish,
            _ => Self::English,
        }
    }

    /// Message table for this language.
    pub fn messages(self) -> &'static Messages {
        match self {
            Self::English => &ENGLISH,
            Self::Japanese => &JAPANESE,
            Self::Chinese => &CHINESE,
            Self::Korean => &KOREAN,
            Self::Spanish => &SPANISH,
        }
    }
}

/// Substitute `value` for the first `{}` in a message template.
pub fn fill(template: &str, value: &str) -> String {
    template.replacen("{}", value, 1)
}

/// Every user-facing string, per language.
#[derive(Debug)]
pub struct Messages {
    // Interactive menu
    pub available_destinations: &'static str,
    pub add_current_directory: &'static str,
    pub exit_option: &'static str,
    pub enter_choice: &'static str,
    pub enter_choice_prompt: &'static str,
    pub cursor_mode_hint: &'static str,
    pub back_to_cursor_mode_hint: &'static str,
    pub press_any_key: &'static str,
    pub key_bindings: &'static str,

    // Navigation
    pub opening_shell: &'static str,
    pub opening_url: &'static str,
    pub destination: &'static str,
    pub type_exit_to_return: &'static str,
    pub you_are_now_in: &'static str,
    pub found_destination: &'static str,

    // Adding a destination
    pub current_directory: &'static str,
    pub enter_label: &'static str,
    pub enter_shortcut_optional: &'static str,
    pub label_cannot_be_empty: &'static str,
    /// Template with one `{}` for the label.
    pub label_already_exists: &'static str,
    /// Template with one `{}` for the shortcut.
    pub shortcut_already_exists: &'static str,
    pub shortcut_must_be_single_char: &'static str,
    pub added: &'static str,
    pub shortcut: &'static str,

    // Errors
    pub error_reading_config: &'static str,
    pub config_file: &'static str,
    pub error_details: &'static str,
    pub config_fix_suggestion: &'static str,
    pub no_destinations_configured: &'static str,
    /// Template with one `{}` for the argument.
    pub destination_not_found: &'static str,
    pub available_destinations_list: &'static str,
    pub directory_not_exist: &'static str,
    pub error_opening_shell: &'static str,
    pub error_opening_url: &'static str,
    pub error_creating_temp_file: &'static str,
    pub error_writing_config_file: &'static str,
    pub error_getting_current_dir: &'static str,
    pub operation_cancelled: &'static str,
    pub invalid_input: &'static str,

    // History
    pub recent_usage_history: &'static str,
    pub no_usage_history_found: &'static str,
    pub warning_failed_to_update_history: &'static str,

    // Commands
    pub will_execute: &'static str,
    pub executing_command: &'static str,
    pub command_completed: &'static str,

    // Help
    pub navigate_directories_quickly: &'static str,
    pub configuration_file: &'static str,
    pub usage: &'static str,
    pub show_interactive_menu: &'static str,
    pub go_to_destination_by_number: &'static str,
    pub go_to_destination_by_label: &'static str,
    pub go_to_destination_by_shortcut: &'static str,
    pub show_help_message: &'static str,
    pub show_version_info: &'static str,
    pub show_completion_candidates: &'static str,
    pub show_recent_usage_history: &'static str,
    pub add_current_directory_to_config: &'static str,
    pub show_destination_list: &'static str,
    pub show_label_list: &'static str,
    pub use_cursor_mode: &'static str,
    pub use_label_mode: &'static str,
    pub use_config_file: &'static str,
    pub use_history_file: &'static str,
    pub examples: &'static str,
    pub navigate_to_first_dest: &'static str,
    pub navigate_to_home_dest: &'static str,
    pub navigate_using_shortcut: &'static str,
    pub show_interactive_menu_example: &'static str,

    // Other
    pub no_directory_selected: &'static str,
    pub created_default_config: &'static str,
}

static ENGLISH: Messages = Messages {
    available_destinations: "👉 Available destinations:",
    add_current_directory: "🌱 [+] Add current directory",
    exit_option: "Exit",
    enter_choice: "Please enter the number, shortcut key, label name, or [+]:",
    enter_choice_prompt: "Enter choice:",
    cursor_mode_hint: "💡 ↑↓/jk: move, Enter: select, number/key: jump, 0: exit, ?: help, Esc: type",
    back_to_cursor_mode_hint: "💡 Press Enter on an empty line to return to cursor mode",
    press_any_key: "Press any key to continue...",
    key_bindings: "Keys:",

    opening_shell: "🚀 Opening new shell in:",
    opening_url: "🌐 Opening URL:",
    destination: "📍 Destination:",
    type_exit_to_return: "💡 Type 'exit' to return to previous shell",
    you_are_now_in: "✅ You are now in:",
    found_destination: "🎯 Found destination:",

    current_directory: "📍 Current directory:",
    enter_label: "Enter a label for this directory:",
    enter_shortcut_optional: "Enter a shortcut key (optional, press Enter to skip):",
    label_cannot_be_empty: "❌ Label cannot be empty.",
    label_already_exists: "❌ Label '{}' already exists.",
    shortcut_already_exists: "❌ Shortcut '{}' already exists. Please enter a different shortcut:",
    shortcut_must_be_single_char: "❌ A shortcut must be a single character. Please try again:",
    added: "✅ Added:",
    shortcut: "🔑 Shortcut:",

    error_reading_config: "❌ Error reading configuration file:",
    config_file: "Config file",
    error_details: "Error details",
    config_fix_suggestion: "Please check the TOML syntax of the configuration file.",
    no_destinations_configured: "⚠️  No destinations configured in ~/.goto.toml",
    destination_not_found: "❌ Destination '{}' not found.",
    available_destinations_list: "📋 Available destinations:",
    directory_not_exist: "❌ Directory does not exist:",
    error_opening_shell: "❌ Error opening shell:",
    error_opening_url: "❌ Error opening URL:",
    error_creating_temp_file: "❌ Error creating temp file:",
    error_writing_config_file: "❌ Error writing to config file:",
    error_getting_current_dir: "❌ Error getting current directory:",
    operation_cancelled: "❌ Operation cancelled.",
    invalid_input: "Invalid input.",

    recent_usage_history: "📈 Recent usage history:",
    no_usage_history_found: "📈 No usage history found.",
    warning_failed_to_update_history: "⚠️  Warning: Failed to update history:",

    will_execute: "⚡ Will execute:",
    executing_command: "⚡ Executing:",
    command_completed: "✅ Command completed. You are now in:",

    navigate_directories_quickly: "🚀 goto - Navigate directories quickly",
    configuration_file: "Configuration file:",
    usage: "Usage:",
    show_interactive_menu: "Show interactive menu",
    go_to_destination_by_number: "Go to destination by number (e.g., goto 1)",
    go_to_destination_by_label: "Go to destination by label name",
    go_to_destination_by_shortcut: "Go to destination by shortcut key",
    show_help_message: "Show this help message",
    show_version_info: "Show version information",
    show_completion_candidates: "Show completion candidates (for shell completion)",
    show_recent_usage_history: "Show recent usage history",
    add_current_directory_to_config: "Add current directory to configuration",
    show_destination_list: "List destinations with numbers and paths",
    show_label_list: "List destination labels only",
    use_cursor_mode: "Start the menu in cursor mode (default)",
    use_label_mode: "Start the menu in label input mode",
    use_config_file: "Use another configuration file",
    use_history_file: "Use another history file",
    examples: "Examples:",
    navigate_to_first_dest: "# Navigate to 1st destination",
    navigate_to_home_dest: "# Navigate to 'Home' destination",
    navigate_using_shortcut: "# Navigate using shortcut 'h'",
    show_interactive_menu_example: "# Show interactive menu",

    no_directory_selected: "ℹ️  No directory selected or operation cancelled.",
    created_default_config: "Created default configuration file:",
};

static JAPANESE: Messages = Messages {
    available_destinations: "😊 どこに移動しますか？",
    add_current_directory: "🌱 [+] 現在のディレクトリを追加",
    exit_option: "終了",
    enter_choice: "[番号]、(キー)、ラベル、または[+]を入力してください:",
    enter_choice_prompt: ">>>",
    cursor_mode_hint: "💡 ↑↓/jk: 移動, Enter: 決定, 番号/キー: ジャンプ, 0: 終了, ?: ヘルプ, Esc: 入力",
    back_to_cursor_mode_hint: "💡 何も入力せずにEnterを押すとカーソルモードに戻ります",
    press_any_key: "何かキーを押して続行...",
    key_bindings: "キー操作:",

    opening_shell: "🚀 新しいシェルを開いています:",
    opening_url: "🌐 URLを開いています:",
    destination: "📍 ディレクトリ:",
    type_exit_to_return: "💡 前のシェルに戻るには 'exit' を入力してください",
    you_are_now_in: "✅ 現在のディレクトリ:",
    found_destination: "🎯 見つかったディレクトリ:",

    current_directory: "📍 現在のディレクトリ:",
    enter_label: "このディレクトリのラベルを入力してください:",
    enter_shortcut_optional: "ショートカットキーを入力してください（任意、Enterでスキップ）:",
    label_cannot_be_empty: "❌ ラベルは空にできません。",
    label_already_exists: "❌ ラベル '{}' は既に存在します。",
    shortcut_already_exists: "❌ ショートカット '{}' は既に使用されています。別のショートカットを入力してください:",
    shortcut_must_be_single_char: "❌ ショートカットは1文字で入力してください:",
    added: "✅ 追加しました:",
    shortcut: "🔑 ショートカット:",

    error_reading_config: "❌ 設定ファイルの読み取りエラー:",
    config_file: "設定ファイル",
    error_details: "エラー詳細",
    config_fix_suggestion: "設定ファイルのTOML構文を確認してください。",
    no_destinations_configured: "⚠️  ~/.goto.toml にディレクトリが設定されていません",
    destination_not_found: "❌ ディレクトリ '{}' が見つかりません。",
    available_destinations_list: "📋 利用可能なディレクトリ:",
    directory_not_exist: "❌ ディレクトリが存在しません:",
    error_opening_shell: "❌ シェルを開くエラー:",
    error_opening_url: "❌ URLを開くエラー:",
    error_creating_temp_file: "❌ 一時ファイルの作成エラー:",
    error_writing_config_file: "❌ 設定ファイルの書き込みエラー:",
    error_getting_current_dir: "❌ 現在のディレクトリの取得エラー:",
    operation_cancelled: "❌ 操作がキャンセルされました。",
    invalid_input: "無効な入力です。",

    recent_usage_history: "📈 最近の使用履歴:",
    no_usage_history_found: "📈 使用履歴が見つかりません。",
    warning_failed_to_update_history: "⚠️  警告: 履歴の更新に失敗しました:",

    will_execute: "⚡ 実行します:",
    executing_command: "⚡ 実行中:",
    command_completed: "✅ コマンドが完了しました。現在のディレクトリ:",

    navigate_directories_quickly: "🚀 goto - ディレクトリ間を素早く移動",
    configuration_file: "設定ファイル:",
    usage: "使用方法:",
    show_interactive_menu: "インタラクティブメニューを表示",
    go_to_destination_by_number: "番号でディレクトリに移動 (例: goto 1)",
    go_to_destination_by_label: "ラベル名でディレクトリに移動",
    go_to_destination_by_shortcut: "ショートカットキーでディレクトリに移動",
    show_help_message: "このヘルプメッセージを表示",
    show_version_info: "バージョン情報を表示",
    show_completion_candidates: "補完候補を表示 (シェル補完用)",
    show_recent_usage_history: "最近の使用履歴を表示",
    add_current_directory_to_config: "現在のディレクトリを設定に追加",
    show_destination_list: "番号とパス付きでディレクトリ一覧を表示",
    show_label_list: "ラベルのみを一覧表示",
    use_cursor_mode: "カーソルモードでメニューを開始 (デフォルト)",
    use_label_mode: "ラベル入力モードでメニューを開始",
    use_config_file: "別の設定ファイルを使用",
    use_history_file: "別の履歴ファイルを使用",
    examples: "例:",
    navigate_to_first_dest: "# 1番目のディレクトリに移動",
    navigate_to_home_dest: "# 'Home' ディレクトリに移動",
    navigate_using_shortcut: "# ショートカット 'h' を使用して移動",
    show_interactive_menu_example: "# インタラクティブメニューを表示",

    no_directory_selected: "ℹ️  ディレクトリが選択されていないか、操作がキャンセルされました。",
    created_default_config: "デフォルト設定ファイルを作成しました:",
};

static CHINESE: Messages = Messages {
    available_destinations: "👉 可用目录:",
    add_current_directory: "🌱 [+] 添加当前目录",
    exit_option: "退出",
    enter_choice: "请输入编号、快捷键、标签名称或 [+] 添加当前目录:",
    enter_choice_prompt: "输入编号、快捷键、标签名称或 [+]:",
    cursor_mode_hint: "💡 ↑↓/jk: 移动, Enter: 选择, 编号/快捷键: 跳转, 0: 退出, ?: 帮助, Esc: 输入",
    back_to_cursor_mode_hint: "💡 直接按 Enter 返回光标模式",
    press_any_key: "按任意键继续...",
    key_bindings: "按键:",

    opening_shell: "🚀 正在打开新Shell:",
    opening_url: "🌐 正在打开URL:",
    destination: "📍 目录:",
    type_exit_to_return: "💡 输入 'exit' 返回上一个Shell",
    you_are_now_in: "✅ 您现在在:",
    found_destination: "🎯 找到目录:",

    current_directory: "📍 当前目录:",
    enter_label: "请输入此目录的标签:",
    enter_shortcut_optional: "请输入快捷键（可选，按Enter跳过）:",
    label_cannot_be_empty: "❌ 标签不能为空。",
    label_already_exists: "❌ 标签 '{}' 已存在。",
    shortcut_already_exists: "❌ 快捷键 '{}' 已存在。请输入不同的快捷键:",
    shortcut_must_be_single_char: "❌ 快捷键必须是单个字符。请重新输入:",
    added: "✅ 已添加:",
    shortcut: "🔑 快捷键:",

    error_reading_config: "❌ 读取配置文件错误:",
    config_file: "配置文件",
    error_details: "错误详情",
    config_fix_suggestion: "请检查配置文件的TOML语法。",
    no_destinations_configured: "⚠️  ~/.goto.toml 中未配置目录",
    destination_not_found: "❌ 未找到目录 '{}'。",
    available_destinations_list: "📋 可用目录:",
    directory_not_exist: "❌ 目录不存在:",
    error_opening_shell: "❌ 打开Shell错误:",
    error_opening_url: "❌ 打开URL错误:",
    error_creating_temp_file: "❌ 创建临时文件错误:",
    error_writing_config_file: "❌ 写入配置文件错误:",
    error_getting_current_dir: "❌ 获取当前目录错误:",
    operation_cancelled: "❌ 操作已取消。",
    invalid_input: "无效输入。",

    recent_usage_history: "📈 最近使用历史:",
    no_usage_history_found: "📈 未找到使用历史。",
    warning_failed_to_update_history: "⚠️  警告: 更新历史失败:",

    will_execute: "⚡ 将执行:",
    executing_command: "⚡ 执行中:",
    command_completed: "✅ 命令已完成。当前目录:",

    navigate_directories_quickly: "🚀 goto - 快速导航目录",
    configuration_file: "配置文件:",
    usage: "用法:",
    show_interactive_menu: "显示交互式菜单",
    go_to_destination_by_number: "通过编号转到目录 (例: goto 1)",
    go_to_destination_by_label: "通过标签名转到目录",
    go_to_destination_by_shortcut: "通过快捷键转到目录",
    show_help_message: "显示此帮助消息",
    show_version_info: "显示版本信息",
    show_completion_candidates: "显示补全候选 (用于Shell补全)",
    show_recent_usage_history: "显示最近使用历史",
    add_current_directory_to_config: "将当前目录添加到配置",
    show_destination_list: "列出目录及其编号和路径",
    show_label_list: "仅列出目录标签",
    use_cursor_mode: "以光标模式启动菜单 (默认)",
    use_label_mode: "以标签输入模式启动菜单",
    use_config_file: "使用其他配置文件",
    use_history_file: "使用其他历史文件",
    examples: "示例:",
    navigate_to_first_dest: "# 导航到第1个目录",
    navigate_to_home_dest: "# 导航到 'Home' 目录",
    navigate_using_shortcut: "# 使用快捷键 'h' 导航",
    show_interactive_menu_example: "# 显示交互式菜单",

    no_directory_selected: "ℹ️  未选择目录或操作已取消。",
    created_default_config: "已创建默认配置文件:",
};

static KOREAN: Messages = Messages {
    available_destinations: "👉 사용 가능한 디렉토리:",
    add_current_directory: "🌱 [+] 현재 디렉토리 추가",
    exit_option: "종료",
    enter_choice: "번호, 단축키, 라벨명 또는 [+]를 입력하세요:",
    enter_choice_prompt: "번호, 단축키, 라벨명 또는 [+] 입력:",
    cursor_mode_hint: "💡 ↑↓/jk: 이동, Enter: 선택, 번호/키: 바로가기, 0: 종료, ?: 도움말, Esc: 입력",
    back_to_cursor_mode_hint: "💡 빈 줄에서 Enter를 누르면 커서 모드로 돌아갑니다",
    press_any_key: "아무 키나 눌러 계속...",
    key_bindings: "키 조작:",

    opening_shell: "🚀 새 셸을 열고 있습니다:",
    opening_url: "🌐 URL을 열고 있습니다:",
    destination: "📍 디렉토리:",
    type_exit_to_return: "💡 이전 셸로 돌아가려면 'exit'를 입력하세요",
    you_are_now_in: "✅ 현재 위치:",
    found_destination: "🎯 디렉토리를 찾았습니다:",

    current_directory: "📍 현재 디렉토리:",
    enter_label: "이 디렉토리의 라벨을 입력하세요:",
    enter_shortcut_optional: "단축키를 입력하세요 (선택사항, Enter로 건너뛰기):",
    label_cannot_be_empty: "❌ 라벨은 비워둘 수 없습니다.",
    label_already_exists: "❌ 라벨 '{}'는 이미 존재합니다.",
    shortcut_already_exists: "❌ 단축키 '{}'는 이미 존재합니다. 다른 단축키를 입력하세요:",
    shortcut_must_be_single_char: "❌ 단축키는 한 글자여야 합니다. 다시 입력하세요:",
    added: "✅ 추가되었습니다:",
    shortcut: "🔑 단축키:",

    error_reading_config: "❌ 설정 파일 읽기 오류:",
    config_file: "설정 파일",
    error_details: "오류 내용",
    config_fix_suggestion: "설정 파일의 TOML 문법을 확인하세요.",
    no_destinations_configured: "⚠️  ~/.goto.toml에 디렉토리가 설정되지 않았습니다",
    destination_not_found: "❌ 디렉토리 '{}'를 찾을 수 없습니다.",
    available_destinations_list: "📋 사용 가능한 디렉토리:",
    directory_not_exist: "❌ 디렉토리가 존재하지 않습니다:",
    error_opening_shell: "❌ 셸 열기 오류:",
    error_opening_url: "❌ URL 열기 오류:",
    error_creating_temp_file: "❌ 임시 파일 생성 오류:",
    error_writing_config_file: "❌ 설정 파일 작성 오류:",
    error_getting_current_dir: "❌ 현재 디렉토리 가져오기 오류:",
    operation_cancelled: "❌ 작업이 취소되었습니다.",
    invalid_input: "잘못된 입력입니다.",

    recent_usage_history: "📈 최근 사용 기록:",
    no_usage_history_found: "📈 사용 기록을 찾을 수 없습니다.",
    warning_failed_to_update_history: "⚠️  경고: 기록 업데이트에 실패했습니다:",

    will_execute: "⚡ 실행할 명령:",
    executing_command: "⚡ 실행 중:",
    command_completed: "✅ 명령이 완료되었습니다. 현재 디렉토리:",

    navigate_directories_quickly: "🚀 goto - 디렉토리 빠른 탐색",
    configuration_file: "설정 파일:",
    usage: "사용법:",
    show_interactive_menu: "대화형 메뉴 표시",
    go_to_destination_by_number: "번호로 디렉토리 이동 (예: goto 1)",
    go_to_destination_by_label: "라벨명으로 디렉토리 이동",
    go_to_destination_by_shortcut: "단축키로 디렉토리 이동",
    show_help_message: "이 도움말 메시지 표시",
    show_version_info: "버전 정보 표시",
    show_completion_candidates: "완성 후보 표시 (셸 완성용)",
    show_recent_usage_history: "최근 사용 기록 표시",
    add_current_directory_to_config: "현재 디렉토리를 설정에 추가",
    show_destination_list: "번호와 경로가 포함된 디렉토리 목록 표시",
    show_label_list: "라벨만 목록으로 표시",
    use_cursor_mode: "커서 모드로 메뉴 시작 (기본값)",
    use_label_mode: "라벨 입력 모드로 메뉴 시작",
    use_config_file: "다른 설정 파일 사용",
    use_history_file: "다른 기록 파일 사용",
    examples: "예제:",
    navigate_to_first_dest: "# 첫 번째 디렉토리로 이동",
    navigate_to_home_dest: "# 'Home' 디렉토리로 이동",
    navigate_using_shortcut: "# 단축키 'h' 사용하여 이동",
    show_interactive_menu_example: "# 대화형 메뉴 표시",

    no_directory_selected: "ℹ️  디렉토리가 선택되지 않았거나 작업이 취소되었습니다.",
    created_default_config: "기본 설정 파일을 생성했습니다:",
};

static SPANISH: Messages = Messages {
    available_destinations: "👉 Destinos disponibles:",
    add_current_directory: "🌱 [+] Agregar directorio actual",
    exit_option: "Salir",
    enter_choice: "Ingrese número, tecla de acceso rápido, nombre de etiqueta o [+]:",
    enter_choice_prompt: "Destino:",
    cursor_mode_hint: "💡 ↑↓/jk: mover, Enter: elegir, nº/tecla: ir, 0: salir, ?: ayuda, Esc: texto",
    back_to_cursor_mode_hint: "💡 Presione Enter en una línea vacía para volver al modo cursor",
    press_any_key: "Presione cualquier tecla para continuar...",
    key_bindings: "Teclas:",

    opening_shell: "🚀 Abriendo nuevo shell en:",
    opening_url: "🌐 Abriendo URL:",
    destination: "📍 Destino:",
    type_exit_to_return: "💡 Escriba 'exit' para regresar al shell anterior",
    you_are_now_in: "✅ Ahora está en:",
    found_destination: "🎯 Destino encontrado:",

    current_directory: "📍 Directorio actual:",
    enter_label: "Ingrese una etiqueta para este directorio:",
    enter_shortcut_optional: "Ingrese una tecla de acceso rápido (opcional, presione Enter para omitir):",
    label_cannot_be_empty: "❌ La etiqueta no puede estar vacía.",
    label_already_exists: "❌ La etiqueta '{}' ya existe.",
    shortcut_already_exists: "❌ El acceso rápido '{}' ya existe. Ingrese un acceso rápido diferente:",
    shortcut_must_be_single_char: "❌ El acceso rápido debe ser un solo carácter. Inténtelo de nuevo:",
    added: "✅ Agregado:",
    shortcut: "🔑 Acceso rápido:",

    error_reading_config: "❌ Error leyendo archivo de configuración:",
    config_file: "Archivo de configuración",
    error_details: "Detalles del error",
    config_fix_suggestion: "Revise la sintaxis TOML del archivo de configuración.",
    no_destinations_configured: "⚠️  No hay destinos configurados en ~/.goto.toml",
    destination_not_found: "❌ Destino '{}' no encontrado.",
    available_destinations_list: "📋 Destinos disponibles:",
    directory_not_exist: "❌ El directorio no existe:",
    error_opening_shell: "❌ Error abriendo shell:",
    error_opening_url: "❌ Error abriendo URL:",
    error_creating_temp_file: "❌ Error creando archivo temporal:",
    error_writing_config_file: "❌ Error escribiendo archivo de configuración:",
    error_getting_current_dir: "❌ Error obteniendo directorio actual:",
    operation_cancelled: "❌ Operación cancelada.",
    invalid_input: "Entrada inválida.",

    recent_usage_history: "📈 Historial de uso reciente:",
    no_usage_history_found: "📈 No se encontró historial de uso.",
    warning_failed_to_update_history: "⚠️  Advertencia: Falló al actualizar historial:",

    will_execute: "⚡ Ejecutará:",
    executing_command: "⚡ Ejecutando:",
    command_completed: "✅ Comando completado. Ahora está en:",

    navigate_directories_quickly: "🚀 goto - Navegar directorios rápidamente",
    configuration_file: "Archivo de configuración:",
    usage: "Uso:",
    show_interactive_menu: "Mostrar menú interactivo",
    go_to_destination_by_number: "Ir al destino por número (ej., goto 1)",
    go_to_destination_by_label: "Ir al destino por nombre de etiqueta",
    go_to_destination_by_shortcut: "Ir al destino por tecla de acceso rápido",
    show_help_message: "Mostrar este mensaje de ayuda",
    show_version_info: "Mostrar información de versión",
    show_completion_candidates: "Mostrar candidatos de completado (para completado de shell)",
    show_recent_usage_history: "Mostrar historial de uso reciente",
    add_current_directory_to_config: "Agregar directorio actual a la configuración",
    show_destination_list: "Listar destinos con números y rutas",
    show_label_list: "Listar solo las etiquetas de los destinos",
    use_cursor_mode: "Iniciar el menú en modo cursor (predeterminado)",
    use_label_mode: "Iniciar el menú en modo de entrada de etiquetas",
    use_config_file: "Usar otro archivo de configuración",
    use_history_file: "Usar otro archivo de historial",
    examples: "Ejemplos:",
    navigate_to_first_dest: "# Navegar al 1er destino",
    navigate_to_home_dest: "# Navegar al destino 'Home'",
    navigate_using_shortcut: "# Navegar usando acceso rápido 'h'",
    show_interactive_menu_example: "# Mostrar menú interactivo",

    no_directory_selected: "ℹ️  No se seleccionó directorio o la operación fue cancelada.",
    created_default_config: "Archivo de configuración por defecto creado:",
};
