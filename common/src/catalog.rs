//! 組み込みエンドポイントカタログ
//!
//! nasne 実機の API 面をそのまま写した表。名前・verb・ポート・パスは
//! 互換性のため変更しないこと（`prograss` の綴りも実機側の名前）。

/// status/config 系ポート
pub const STATUS_PORT: u16 = 64210;

/// recording/schedule 系ポート
pub const SCHEDULE_PORT: u16 = 64220;

/// カタログ表を `$callback!` に渡す
///
/// 各行は `name => VERB port "path";`。レジストリ用の定数表と、
/// クライアントの型付きメソッドの両方をこの1つの表から生成する。
#[macro_export]
macro_rules! with_catalog {
    ($callback:ident) => {
        $callback! {
            get_channel_logo_data => GET 64210 "/chEpg/channelLogoDataGet";
            get_epg => POST 64210 "/chEpg/EPGGet";
            start_epg_store => POST 64210 "/chEpg/EPGStoreStart";
            get_connection_online_id => GET 64210 "/cma/connectionOnlineIdGet";
            get_reconstruct_database_progress => GET 64210 "/cma/reconstructDatabaseProgressGet";
            get_reconstruct_database_prograss => GET 64210 "/config/reconstructDatabaseProgressGet";
            get_nas_meta_data_analyze_progress => GET 64210 "/config/NASMetaDataAnalyzeProgressGet";
            get_title_list => GET 64220 "/recorded/titleListGet";
            get_recorded_content_thumbnail => GET 64210 "/recorded/recordedContentThumbnailGet";
            get_matching_id_info => GET 64210 "/remoteAccess/dr/matchingIdInfoGet";
            get_outdoor_client_list2 => GET 64210 "/remoteAccess/dr/outdoorClientListGet2";
            get_register_request_list => GET 64210 "/remoteAccess/dr/registerRequestListGet";
            get_registerd_folder_name_by_receiver => GET 64210 "/remoteAccess/sync/registerdFolderNameGetByReceiver";
            get_reserved_folder_name_by_initiator => GET 64210 "/remoteAccess/sync/reservedFolderNameGetByInitiator";
            get_sync_dtv_tuner_list2 => GET 64210 "/remoteAccess/sync/syncDTVTunerListGet_2";
            get_conflict_list => GET 64220 "/schedule/conflictListGet";
            get_reserved_info_bitrate => GET 64220 "/schedule/reservedInfoBitrateGet";
            create_reserved_info => POST 64220 "/schedule/reservedInfoCreate";
            delete_reserved_info => POST 64220 "/schedule/reservedInfoDelete";
            get_reserved_list => GET 64220 "/schedule/reservedListGet";
            get_area_info => GET 64210 "/status/areaInfoGet";
            get_bcas_info => GET 64210 "/status/BCASInfoGet";
            get_box_name => GET 64210 "/status/boxNameGet";
            get_box_status_list => GET 64210 "/status/boxStatusListGet";
            get_bd_power_supply => GET 64210 "/status/bdPowerSupplyGet";
            get_channel_physical_info => GET 64210 "/status/channelPhysicalInfoGet";
            get_end_of_channel_physical_info => POST 64210 "/status/channelPhysicalInfoGetEnd";
            get_start_of_channel_physical_info => POST 64210 "/status/channelPhysicalInfoGetStart";
            get_channel_info => GET 64210 "/status/channelInfoGet";
            get_channel_info2 => GET 64210 "/status/channelInfoGet2";
            get_channel_list => GET 64210 "/status/channelListGet";
            get_curr_date => GET 64210 "/status/currDateGet";
            get_dlna_media_server_icon => GET 64210 "/status/DLNAMediaServerIconGet";
            get_dlna_media_server_icon_list => GET 64210 "/status/DLNAMediaServerIconListGet";
            get_dmp_auto_register_info => GET 64210 "/status/DMPAutoRegisterInfoGet";
            get_dmp_list => GET 64210 "/status/DMPListGet";
            get_downloading_permission => GET 64210 "/status/downloadingPermissionGet";
            get_dtcpip_client_list => GET 64210 "/status/dtcpipClientListGet";
            get_epg_version_info => GET 64210 "/status/EPGVersionInfoGet";
            get_event_relay_info => GET 64210 "/status/eventRelayInfoGet";
            get_hdd_info => GET 64210 "/status/HDDInfoGet";
            get_hdd_list => GET 64210 "/status/HDDListGet";
            get_hdd_power_saving_mode => GET 64210 "/status/HDDPowerSavingModeGet";
            setup_is_finish => GET 64210 "/status/isFinishSetup";
            get_nas_info => GET 64210 "/status/NASInfoGet";
            get_mobile_bitrate_info => GET 64210 "/status/mobileBitrateInfoGet";
            get_network_if_info => GET 64210 "/status/networkIfInfoGet";
            get_parental_rating_info => GET 64210 "/status/parentalRatingInfoGet";
            get_parental_rating_password => GET 64210 "/status/parentalRatingPasswordGet";
            get_rec_ng_list => GET 64210 "/status/recNgListGet";
            get_remote_list => GET 64210 "/status/remoteListGet";
            get_request_client_info => GET 64210 "/status/requestClientInfoGet";
            get_software_version => GET 64210 "/status/softwareVersionGet";
            get_tot_status => GET 64210 "/status/TOTStatusGet";
            check_update => GET 64210 "/status/updateCheck";
            check_update2 => GET 64210 "/status/updateCheck2";
        }
    };
}

macro_rules! define_catalog {
    ($($name:ident => $verb:ident $port:literal $path:literal;)+) => {
        /// `(操作名, verb, port, path)` の組み込みカタログ
        pub const CATALOG: &[(&str, &str, u16, &str)] = &[
            $((stringify!($name), stringify!($verb), $port, $path),)+
        ];
    };
}

with_catalog!(define_catalog);
